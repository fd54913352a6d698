//! # Companion Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Companion
//! application. It follows a two-layer approach:
//! - `CompanionError`: A custom error enum using `thiserror` for the failures
//!   callers need to tell apart (bad configuration, unknown mood names, and the
//!   different ways the external generator can fail).
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so that any error can be
//!   propagated with added context.
//!
//! ## Error Taxonomy
//!
//! - `Config`: invalid configuration values; fatal to the command.
//! - `UnknownMood`: a mood name outside the five selectable options.
//! - `PipelineUnavailable`: the configured generator program cannot be found;
//!   fatal to the chat session, carries install/upgrade guidance.
//! - `PipelineConstruction`: any other failure while preparing the generator;
//!   fatal to the chat session, carries the raw description.
//! - `Generation`: a single generation call failed. This one never reaches the
//!   user as an error; the pipeline responder turns it into a fallback reply.
//!
//! ## Examples
//!
//! ```rust
//! use companion::core::error::CompanionError;
//!
//! let err = CompanionError::UnknownMood("sleepy".into());
//! assert!(err.to_string().contains("sleepy"));
//!
//! // Checking for a specific variant behind an anyhow::Error
//! let wrapped: anyhow::Error = CompanionError::Config("bad".into()).into();
//! assert!(matches!(
//!     wrapped.downcast_ref::<CompanionError>(),
//!     Some(CompanionError::Config(_))
//! ));
//! ```
//!
use thiserror::Error;

/// Custom error type for the Companion application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CompanionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown mood '{0}'. Choose one of: Happy, Sad, Anxious, Angry, Neutral.")]
    UnknownMood(String),

    #[error(
        "The conversational generator '{command}' is not available. \
         Install it or upgrade to a version that supports conversational generation, \
         then check the [pipeline] section of your configuration."
    )]
    PipelineUnavailable { command: String },

    #[error("Failed to load the conversational generator: {0}")]
    PipelineConstruction(String),

    #[error("Generation failed: {0}")]
    Generation(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
