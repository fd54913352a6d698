//! # Companion UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Everything the terminal front end prints is formatted here, so that the
//! command handlers only decide *what* to show. The functions return `String`s
//! (or write into a `Write`r) and never touch session state.
//!
//! ## Formats
//!
//! - Transcript line: `**You:** text` / `**Companion:** text`
//! - Mood history line: `{timestamp}: {mood} {emoji}`, newest first
//! - Mood logged: `Mood '{mood}' logged at {timestamp} {emoji}`
//!
//! Emoji lookup goes by mood *name* so that values coming from outside the
//! five known moods still render, with a generic 🙂.
//!
use crate::session::{Mood, MoodEntry, Session, Turn, RECENT_MOOD_LIMIT};
use std::io::{self, Write};

pub const TITLE: &str = "🧠 Mental Wellness Companion";

pub const WELCOME: &str = "Welcome! This companion is here to listen, offer coping strategies, \
track your mood, and provide helpful resources.\n\
Note: This tool is not a substitute for professional mental health care.";

pub const PRIVACY_NOTICE: &str = "### Privacy & Ethics\n\
- Your data is stored only during this session and not shared or saved externally.\n\
- This companion is not a replacement for professional help.\n\
- If you are in crisis, please contact emergency services or a trusted professional immediately.";

pub const MOOD_HISTORY_HEADER: &str = "📊 Mood History";

const FALLBACK_EMOJI: &str = "🙂";

/// Emoji for a mood name; 🙂 for anything that is not one of the five moods.
pub fn mood_emoji(name: &str) -> &'static str {
    match name {
        "Happy" => "😊",
        "Sad" => "😢",
        "Anxious" => "😰",
        "Angry" => "😠",
        "Neutral" => "😐",
        _ => FALLBACK_EMOJI,
    }
}

pub fn format_turn(turn: &Turn) -> String {
    format!("**{}:** {}", turn.role().label(), turn.text())
}

pub fn format_mood_entry(entry: &MoodEntry) -> String {
    let name = entry.mood().name();
    format!("{}: {} {}", entry.timestamp(), name, mood_emoji(name))
}

pub fn format_mood_logged(entry: &MoodEntry) -> String {
    let name = entry.mood().name();
    format!(
        "Mood '{}' logged at {} {}",
        name,
        entry.timestamp(),
        mood_emoji(name)
    )
}

/// The mood selector options, e.g. `Happy 😊  Sad 😢  ...`.
pub fn format_mood_options() -> String {
    Mood::ALL
        .iter()
        .map(|mood| format!("{} {}", mood, mood_emoji(mood.name())))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Writes the mood history panel. Writes nothing when no mood is logged.
pub fn render_mood_history<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let recent = session.recent_moods(RECENT_MOOD_LIMIT);
    if recent.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", MOOD_HISTORY_HEADER)?;
    for entry in recent {
        writeln!(out, "{}", format_mood_entry(entry))?;
    }
    Ok(())
}

/// Writes every turn in order.
pub fn render_transcript<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    for turn in session.turns() {
        writeln!(out, "{}", format_turn(turn))?;
    }
    Ok(())
}

pub fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", WELCOME)?;
    writeln!(out)
}
