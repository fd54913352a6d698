//! # Companion System Utilities Module (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//!
//! ## Overview
//!
//! System-level checks against the host environment. Currently this is the
//! `tools` submodule, which verifies that an external program can be started
//! before Companion relies on it.

pub mod tools;
