//! # Companion Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module handles loading, merging, validation, and access to the
//! configuration for Companion. It decides which response strategy a chat
//! session uses by default, how mood timestamps are formatted, and how the
//! external conversational generator is invoked.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given with `--config <path>` (or `COMPANION_CONFIG`).
//!    When present, no other file is read.
//! 2. Project-specific `.companion.toml` in the current directory or an
//!    ancestor (the search stops at a directory containing `.git`).
//! 3. User-specific `<config dir>/companion/config.toml`.
//! 4. Default values defined in the code.
//!
//! After loading, `~` in the generator command is expanded and the result is
//! validated before use.
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! strategy = "pipeline"
//! timestamp_format = "%Y-%m-%d %H:%M:%S"
//!
//! [pipeline]
//! command = "ollama"
//! args = ["run", "llama3"]
//! prompt_template = "{input}"
//! timeout_secs = 60
//! ```
//!
//! ```rust,no_run
//! # fn main() -> anyhow::Result<()> {
//! let cfg = companion::core::config::load_config(None)?;
//! println!("Default strategy: {:?}", cfg.chat.strategy);
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{CompanionError, Result};
use crate::responder::Strategy;
use anyhow::{anyhow, Context};
use chrono::format::{Item, StrftimeItems};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Placeholder replaced by the user's utterance in `prompt_template`.
pub const INPUT_PLACEHOLDER: &str = "{input}";
/// Placeholder replaced by the last logged mood in `prompt_template`.
pub const MOOD_PLACEHOLDER: &str = "{mood}";

const PROJECT_CONFIG_FILENAME: &str = ".companion.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Settings for the interactive chat session.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Response strategy used when `--strategy` is not given.
    #[serde(default)]
    pub strategy: Strategy,
    /// `strftime`-style format for mood log timestamps.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

/// How to invoke the external conversational generator (the "pipeline").
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Program to run (can use ~). Empty means no generator is configured.
    #[serde(default)]
    pub command: String,
    /// Arguments passed on every generation call.
    #[serde(default)]
    pub args: Vec<String>,
    /// Arguments used once at startup to check that the program is usable.
    #[serde(default = "default_probe_args")]
    pub probe_args: Vec<String>,
    /// Template wrapping the utterance before it is sent to the generator.
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,
    /// Seconds a single generation call (or the startup probe) may run
    /// before the program is killed.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            command: String::new(),
            args: Vec::new(),
            probe_args: default_probe_args(),
            prompt_template: default_prompt_template(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}
fn default_probe_args() -> Vec<String> {
    vec!["--version".to_string()]
}
fn default_prompt_template() -> String {
    INPUT_PLACEHOLDER.to_string()
}
fn default_timeout_secs() -> u64 {
    60
}

/// # Load Configuration (`load_config`)
///
/// Loads the effective configuration. With `explicit` set, only that file is
/// read and it must exist. Otherwise the user and project files are merged
/// over the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Companion", "companion") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(path) = find_project_config_path(&current_dir) {
        info!("Loading project configuration from: {}", path.display());
        load_config_from_path(&path).map(Some)
    } else {
        debug!("No project configuration file ({PROJECT_CONFIG_FILENAME}) found.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for
/// `.companion.toml`, stopping at the first directory that holds `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = user;

    if project.chat.strategy != defaults.chat.strategy {
        merged.chat.strategy = project.chat.strategy;
    }
    if project.chat.timestamp_format != defaults.chat.timestamp_format {
        merged.chat.timestamp_format = project.chat.timestamp_format;
    }
    if !project.pipeline.command.is_empty() {
        merged.pipeline.command = project.pipeline.command;
    }
    if !project.pipeline.args.is_empty() {
        merged.pipeline.args = project.pipeline.args;
    }
    if project.pipeline.probe_args != defaults.pipeline.probe_args {
        merged.pipeline.probe_args = project.pipeline.probe_args;
    }
    if project.pipeline.prompt_template != defaults.pipeline.prompt_template {
        merged.pipeline.prompt_template = project.pipeline.prompt_template;
    }
    if project.pipeline.timeout_secs != defaults.pipeline.timeout_secs {
        merged.pipeline.timeout_secs = project.pipeline.timeout_secs;
    }
    merged
}

fn expand_config_paths(config: &mut Config) {
    if !config.pipeline.command.is_empty() {
        config.pipeline.command = shellexpand::tilde(&config.pipeline.command).into_owned();
        debug!("Expanded generator command: {}", config.pipeline.command);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    let format = &config.chat.timestamp_format;
    if format.trim().is_empty() {
        return Err(anyhow!(CompanionError::Config(
            "chat.timestamp_format cannot be empty.".to_string()
        )));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(anyhow!(CompanionError::Config(format!(
            "Invalid chat.timestamp_format '{format}'."
        ))));
    }
    if !config.pipeline.prompt_template.contains(INPUT_PLACEHOLDER) {
        return Err(anyhow!(CompanionError::Config(format!(
            "pipeline.prompt_template must contain the {INPUT_PLACEHOLDER} placeholder."
        ))));
    }
    if config.pipeline.timeout_secs == 0 {
        return Err(anyhow!(CompanionError::Config(
            "pipeline.timeout_secs must be at least 1.".to_string()
        )));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
