//! # Companion Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the `companion` CLI.
//! Each command module defines its own Clap arguments struct and an async
//! handler that `main.rs` dispatches to.
//!
//! ## Commands
//!
//! - `chat`: Interactive chat session with mood tracking (the default)
//! - `respond`: One-shot reply to a single message
//! - `moods`: List the moods that can be logged
//!

/// Interactive chat session. Owns the read-respond-print loop.
pub mod chat;
/// List of loggable moods.
pub mod moods;
/// One-shot reply for scripting.
pub mod respond;
