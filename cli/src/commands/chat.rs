//! # Companion Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! This module implements `companion chat`, the interactive session. It
//! handles:
//! - Loading configuration and choosing the response strategy
//! - Building the responder once, before the first message (a generator that
//!   cannot be loaded ends the command here, before any turn is recorded)
//! - Reading lines, logging moods, and printing replies until the user quits
//!
//! ## In-chat Commands
//!
//! | Input               | Effect                                         |
//! |---------------------|------------------------------------------------|
//! | `/mood <name>`      | Log a mood with the current local time          |
//! | `/history`          | Show the last five logged moods, newest first   |
//! | `/transcript`       | Show the whole conversation so far              |
//! | `/help`             | List these commands                             |
//! | `/quit`, `/exit`, `bye` | End the session                             |
//! | anything else       | Send it to the companion                        |
//!
//! Blank lines are ignored. Bytes that are not valid UTF-8 are replaced with
//! U+FFFD rather than ending the session. End of input also ends the session.
//! The privacy notice is printed on the way out.
//!
//! ## Examples
//!
//! ```bash
//! companion chat
//! companion chat --strategy pipeline
//! ```
//!
use crate::common::ui;
use crate::core::config;
use crate::core::error::Result;
use crate::responder::{build_responder, Responder, Strategy};
use crate::session::{timestamp_now, Mood, Session};
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {
    /// Response strategy; overrides `chat.strategy` from the configuration.
    #[arg(long, short, value_enum)]
    pub strategy: Option<Strategy>,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs an interactive session on stdin/stdout.
///
/// ## Errors
///
/// Returns an error if the configuration is invalid, if the pipeline
/// strategy's generator cannot be loaded, or if the terminal cannot be read
/// or written.
pub async fn handle_chat(args: ChatArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling chat command...");
    let config = config::load_config(config_path)?;
    let strategy = args.strategy.unwrap_or(config.chat.strategy);
    let responder = build_responder(strategy, &config.pipeline)?;

    let format = config.chat.timestamp_format.clone();
    let mut chat = ChatLoop::new(responder.as_ref(), move || timestamp_now(&format));

    let stdin = io::stdin();
    let stdout = io::stdout();
    chat.run(stdin.lock(), stdout.lock())
        .context("Chat session failed")?;

    debug!(
        "Session ended with {} turns and {} mood entries",
        chat.session().turns().len(),
        chat.session().moods().len()
    );
    Ok(())
}

/// One parsed line of chat input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ChatInput {
    Empty,
    Message(String),
    LogMood(Option<String>),
    History,
    Transcript,
    Help,
    Quit,
    Unknown(String),
}

fn parse_line(line: &str) -> ChatInput {
    let raw = line.trim_end_matches(['\n', '\r']);
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return ChatInput::Empty;
    }
    if trimmed.eq_ignore_ascii_case("bye") {
        return ChatInput::Quit;
    }
    let Some(command) = trimmed.strip_prefix('/') else {
        return ChatInput::Message(raw.to_string());
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };
    match name.to_ascii_lowercase().as_str() {
        "mood" => ChatInput::LogMood((!rest.is_empty()).then(|| rest.to_string())),
        "history" => ChatInput::History,
        "transcript" => ChatInput::Transcript,
        "help" => ChatInput::Help,
        "quit" | "exit" => ChatInput::Quit,
        _ => ChatInput::Unknown(trimmed.to_string()),
    }
}

const HELP_TEXT: &str = concat!(
    "Commands:\n",
    "  /mood <name>   log how you feel (Happy, Sad, Anxious, Angry, Neutral)\n",
    "  /history       show your last five moods\n",
    "  /transcript    show the conversation so far\n",
    "  /help          show this help\n",
    "  /quit          end the session",
);

/// The read-respond-print loop around a `Session`.
///
/// Generic over its input and output so it can be driven from tests.
pub struct ChatLoop<'a> {
    session: Session,
    responder: &'a dyn Responder,
    clock: Box<dyn Fn() -> String + 'a>,
}

impl<'a> ChatLoop<'a> {
    /// `clock` produces the timestamp for each logged mood.
    pub fn new(responder: &'a dyn Responder, clock: impl Fn() -> String + 'a) -> Self {
        Self {
            session: Session::new(),
            responder,
            clock: Box::new(clock),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `/quit`, `bye`, or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        ui::render_banner(&mut out)?;
        writeln!(out, "How are you feeling right now? {}", ui::format_mood_options())?;
        writeln!(out, "Log a mood with /mood <name>. Type /help for commands.")?;
        writeln!(out)?;

        loop {
            write!(out, "You: ")?;
            out.flush()?;

            let mut buf = Vec::new();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(out)?;
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            match parse_line(&line) {
                ChatInput::Empty => continue,
                ChatInput::Quit => break,
                ChatInput::Message(text) => self.send(&text, &mut out)?,
                ChatInput::LogMood(name) => self.log_mood(name.as_deref(), &mut out)?,
                ChatInput::History => {
                    if self.session.moods().is_empty() {
                        writeln!(out, "No moods logged yet.")?;
                    } else {
                        ui::render_mood_history(&mut out, &self.session)?;
                    }
                }
                ChatInput::Transcript => ui::render_transcript(&mut out, &self.session)?,
                ChatInput::Help => writeln!(out, "{}", HELP_TEXT)?,
                ChatInput::Unknown(command) => {
                    writeln!(out, "Unknown command '{}'. Type /help for commands.", command)?
                }
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", ui::PRIVACY_NOTICE)?;
        out.flush()
    }

    fn send<W: Write>(&mut self, text: &str, out: &mut W) -> io::Result<()> {
        if self.session.submit(text, self.responder).is_some() {
            if let Some(turn) = self.session.turns().last() {
                writeln!(out, "{}", ui::format_turn(turn))?;
            }
        }
        Ok(())
    }

    fn log_mood<W: Write>(&mut self, name: Option<&str>, out: &mut W) -> io::Result<()> {
        let Some(name) = name else {
            return writeln!(out, "Usage: /mood <name>. Options: {}", ui::format_mood_options());
        };
        match name.parse::<Mood>() {
            Ok(mood) => {
                let timestamp = (self.clock)();
                let entry = self.session.log_mood(mood, timestamp);
                writeln!(out, "{}", ui::format_mood_logged(entry))?;
                ui::render_mood_history(out, &self.session)
            }
            Err(e) => writeln!(out, "{}", e),
        }
    }
}
