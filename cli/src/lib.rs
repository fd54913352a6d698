//! # Companion Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! A terminal mental wellness companion: the user logs how they feel, chats,
//! and gets a reply either from ordered keyword rules or from an external
//! conversational generator.
//!
//! The library is shared by the `companion` binary (`main.rs`) and the
//! integration tests under `cli/tests/`.
//!
//! ## Architecture
//!
//! - `session`: the per-session transcript and mood log (append-only)
//! - `responder`: reply selection (`RuleResponder`, `PipelineResponder`)
//! - `commands`: `chat`, `respond`, and `moods` command handlers
//! - `common`: process execution, tool probing, terminal rendering
//! - `core`: configuration and error types
//!
//! Control flow for one message: the chat loop passes the text to
//! `Session::submit`, which asks the responder for a reply using the last
//! logged mood and then records both turns; the loop prints the reply.
//!

pub mod commands;
pub mod common;
pub mod core;
pub mod responder;
pub mod session;
