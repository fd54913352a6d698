//! # Chat Turns
//!
//! File: cli/src/session/turn.rs
//!
//! A `Turn` is one message in the transcript, tagged with who said it.
//! Turns are created once and never edited.

use std::fmt;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Companion,
}

impl Role {
    /// Speaker label used when rendering the transcript.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Companion => "Companion",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One message exchanged in the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    role: Role,
    text: String,
}

impl Turn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
