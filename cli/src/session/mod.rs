//! # Companion Session State Store
//!
//! File: cli/src/session/mod.rs
//!
//! ## Overview
//!
//! A `Session` is the per-user container for everything that happens during
//! one interactive run: the chat transcript (a list of `Turn`s) and the mood
//! log (a list of `MoodEntry`s). Nothing here is persisted; the session is
//! dropped when the chat ends.
//!
//! ## Invariants
//!
//! - Both lists are append-only. The fields are private and the only
//!   mutating methods are `append_turn`, `log_mood` and `submit`.
//! - Turn order is display order; mood order is chronological order.
//! - `submit` is the single entry point for a chat submission. It computes the
//!   reply before touching the transcript and then appends the user turn and
//!   the companion turn together, so an accepted submission always grows the
//!   transcript by exactly two turns and an ignored one leaves it untouched.
//!
//! ## Examples
//!
//! ```rust
//! use companion::responder::RuleResponder;
//! use companion::session::{Mood, Session};
//!
//! let mut session = Session::new();
//! session.log_mood(Mood::Sad, "2024-01-01 09:00:00");
//!
//! let reply = session.submit("I'm feeling down", &RuleResponder).unwrap();
//! assert!(reply.starts_with("I'm sorry to hear"));
//! assert_eq!(session.turns().len(), 2);
//! ```

mod mood;
mod turn;

pub use mood::{timestamp_now, Mood, MoodEntry};
pub use turn::{Role, Turn};

use crate::responder::Responder;
use tracing::debug;

/// Number of mood entries shown in the mood history.
pub const RECENT_MOOD_LIMIT: usize = 5;

/// Chat transcript and mood log for one interactive session.
#[derive(Debug, Default, Clone)]
pub struct Session {
    turns: Vec<Turn>,
    moods: Vec<MoodEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn to the transcript.
    ///
    /// Callers are expected to have rejected empty text already.
    pub fn append_turn(&mut self, role: Role, text: impl Into<String>) {
        self.turns.push(Turn::new(role, text));
    }

    /// Appends a mood entry and returns it.
    pub fn log_mood(&mut self, mood: Mood, timestamp: impl Into<String>) -> &MoodEntry {
        let entry = MoodEntry::new(mood, timestamp);
        debug!("Logging mood {} at {}", entry.mood(), entry.timestamp());
        self.moods.push(entry);
        &self.moods[self.moods.len() - 1]
    }

    /// The last `n` mood entries, most recent first.
    pub fn recent_moods(&self, n: usize) -> Vec<&MoodEntry> {
        self.moods.iter().rev().take(n).collect()
    }

    /// Mood of the latest entry, or `Mood::Neutral` when nothing is logged.
    pub fn last_mood(&self) -> Mood {
        self.moods.last().map(MoodEntry::mood).unwrap_or_default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn moods(&self) -> &[MoodEntry] {
        &self.moods
    }

    /// Runs one submission through `responder`.
    ///
    /// Returns `None` and changes nothing when `input` is empty or only
    /// whitespace. Otherwise returns the reply after recording both turns.
    pub fn submit<R>(&mut self, input: &str, responder: &R) -> Option<String>
    where
        R: Responder + ?Sized,
    {
        if input.trim().is_empty() {
            debug!("Ignoring empty submission");
            return None;
        }

        let reply = responder.respond(input, self.last_mood());

        self.append_turn(Role::User, input);
        self.append_turn(Role::Companion, reply.clone());
        Some(reply)
    }
}
