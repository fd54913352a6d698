//! # Companion Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers and the pipeline responder,
//! kept apart from the domain logic in `session` and `responder`:
//!
//! - **`process`**: running an external program with stdin input and
//!   captured output.
//! - **`system`**: host checks, such as probing whether a program is installed.
//! - **`ui`**: terminal formatting of the transcript, mood history, and notices.
//!

/// Utilities for executing external processes.
pub mod process;
/// Utilities for system-level checks (tool detection).
pub mod system;
/// Terminal formatting for transcripts, mood history and notices.
pub mod ui;
