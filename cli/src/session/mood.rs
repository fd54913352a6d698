//! # Mood Tracking Types
//!
//! File: cli/src/session/mood.rs
//!
//! ## Overview
//!
//! Defines the five self-reported moods a user can log, the timestamped
//! `MoodEntry` stored in the session, and the helper that stamps entries with
//! the local time.
//!
//! Mood names parse case-insensitively (`"sad"`, `"SAD"` and `"Sad"` are all
//! `Mood::Sad`) and display in their capitalized form, which is also the form
//! shown in the mood history.

use crate::core::error::CompanionError;
use chrono::Local;
use std::fmt::{self, Write as _};
use std::str::FromStr;
use tracing::warn;

/// A self-reported mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Angry,
    #[default]
    Neutral,
}

impl Mood {
    /// All selectable moods, in the order the selector offers them.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Angry,
        Mood::Neutral,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Angry => "Angry",
            Mood::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CompanionError::UnknownMood(wanted.to_string()))
    }
}

/// A timestamped mood selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntry {
    mood: Mood,
    timestamp: String,
}

impl MoodEntry {
    pub fn new(mood: Mood, timestamp: impl Into<String>) -> Self {
        Self {
            mood,
            timestamp: timestamp.into(),
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Formats the current local time with a `strftime`-style `format`.
///
/// Falls back to `%Y-%m-%d %H:%M:%S` if `format` contains an invalid
/// specifier, so a bad format never aborts mood logging.
pub fn timestamp_now(format: &str) -> String {
    let now = Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        warn!("Invalid timestamp format '{}', using default.", format);
        out = now.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    out
}
