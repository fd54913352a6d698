//! # Companion Respond Command
//!
//! File: cli/src/commands/respond.rs
//!
//! ## Overview
//!
//! This module implements `companion respond`, a one-shot version of a chat
//! submission for scripts and quick checks. The text is run through a fresh
//! session exactly as the interactive chat would run it, optionally after
//! logging a mood first, and only the companion's reply is printed.
//!
//! Empty or whitespace-only text prints nothing and succeeds, matching the
//! chat loop, which ignores blank submissions.
//!
//! ## Examples
//!
//! ```bash
//! companion respond "I feel a bit anxious about tomorrow"
//! companion respond --mood sad --strategy pipeline I had a rough day
//! ```
//!
use crate::core::config;
use crate::core::error::Result;
use crate::responder::{build_responder, Strategy};
use crate::session::{timestamp_now, Mood, Session};
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};

/// # Respond Arguments (`RespondArgs`)
#[derive(Parser, Debug)]
pub struct RespondArgs {
    /// Text to respond to. Multiple words are joined with single spaces.
    pub text: Vec<String>,

    /// Log this mood before responding (Happy, Sad, Anxious, Angry, Neutral).
    #[arg(long, short)]
    pub mood: Option<Mood>,

    /// Response strategy; overrides `chat.strategy` from the configuration.
    #[arg(long, short, value_enum)]
    pub strategy: Option<Strategy>,
}

/// # Handle Respond Command (`handle_respond`)
///
/// Builds the responder, runs one submission, and prints the reply.
///
/// ## Errors
///
/// Returns an error if the configuration is invalid or the pipeline
/// strategy's generator cannot be loaded. Generation failures are not errors;
/// they print the fallback reply.
pub async fn handle_respond(args: RespondArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling respond command...");
    let config = config::load_config(config_path)?;
    let strategy = args.strategy.unwrap_or(config.chat.strategy);
    let responder = build_responder(strategy, &config.pipeline)?;

    let mut session = Session::new();
    if let Some(mood) = args.mood {
        session.log_mood(mood, timestamp_now(&config.chat.timestamp_format));
    }

    let text = args.text.join(" ");
    match session.submit(&text, responder.as_ref()) {
        Some(reply) => println!("{}", reply),
        None => debug!("Empty input, nothing to respond to."),
    }
    Ok(())
}
