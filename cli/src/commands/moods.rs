//! # Companion Moods Command
//!
//! File: cli/src/commands/moods.rs
//!
//! Implements `companion moods`: prints the five moods that can be logged,
//! one per line with their emoji, in the order the chat offers them.

use crate::common::ui;
use crate::core::error::Result;
use crate::session::Mood;
use clap::Parser;

/// # Moods Arguments (`MoodsArgs`)
///
/// No arguments; the struct keeps the command shape consistent with the others.
#[derive(Parser, Debug, Default)]
pub struct MoodsArgs {}

pub async fn handle_moods(_args: MoodsArgs) -> Result<()> {
    for mood in Mood::ALL {
        println!("{} {}", mood, ui::mood_emoji(mood.name()));
    }
    Ok(())
}
