//! # Companion CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`respond.rs`, `chat.rs`,
//! etc.). Each test writes its own configuration file into a temporary
//! directory and points the binary at it, so a user's real
//! `~/.config/companion/config.toml` never influences the results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// # Get Companion Command (`companion_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `companion` binary with
/// `COMPANION_CONFIG` and `RUST_LOG` cleared.
///
/// ## Panics
/// Panics if the `companion` binary cannot be found via `Command::cargo_bin`.
pub fn companion_cmd() -> Command {
    let mut cmd = Command::cargo_bin("companion").expect("Failed to find companion binary for testing");
    cmd.env_remove("COMPANION_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Writes `contents` to `companion.toml` inside `dir` and returns its path.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("companion.toml");
    std::fs::write(&path, contents).expect("Failed to write test config");
    path
}

/// A `[pipeline]` config that runs `sh -c <script>` as the generator.
pub fn sh_pipeline_config(script: &str, prompt_template: &str) -> String {
    format!(
        r#"
[chat]
strategy = "pipeline"

[pipeline]
command = "sh"
args = ["-c", "{script}"]
probe_args = ["-c", "exit 0"]
prompt_template = "{prompt_template}"
"#
    )
}
