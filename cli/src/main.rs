//! # Companion Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `companion` CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! Running `companion` without a subcommand starts an interactive chat.
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting with the default (rule-based) strategy
//! companion
//!
//! # Chat through the configured generator, with debug logging
//! companion -vv chat --strategy pipeline
//!
//! # One-shot reply
//! companion respond "I'm worried about my exam"
//! ```
//!
use clap::{Parser, Subcommand};
use companion::commands;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "companion",
    about = "🧠 Mental Wellness Companion: chat, track your mood, find coping strategies",
    long_about = "A terminal chat companion that listens, offers coping strategies and\n\
                  resources, and keeps a mood log for the current session only.\n\
                  Not a substitute for professional mental health care.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Read configuration from this file only.
    #[arg(long, global = true, env = "COMPANION_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive chat session (default).
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Print the companion's reply to a single message.
    #[command(alias = "r")]
    Respond(commands::respond::RespondArgs),
    /// List the moods that can be logged.
    Moods(commands::moods::MoodsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config_path = cli.config.as_deref();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Chat(commands::chat::ChatArgs::default()));

    let command_result = match command {
        Commands::Chat(args) => commands::chat::handle_chat(args, config_path).await,
        Commands::Respond(args) => commands::respond::handle_respond(args, config_path).await,
        Commands::Moods(args) => commands::moods::handle_moods(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["companion"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["companion", "respond", "-vv", "--config", "x.toml", "hi"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Some(Commands::Respond(_))));
    }

    #[test]
    fn aliases() {
        assert!(matches!(
            Cli::try_parse_from(["companion", "c"]).unwrap().command,
            Some(Commands::Chat(_))
        ));
    }
}
