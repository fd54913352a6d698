//! # Companion Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by the session
//! store, the responders and the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use companion::core::config; // For loading configuration
//! use companion::core::error::{CompanionError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
