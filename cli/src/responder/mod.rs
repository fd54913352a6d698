//! # Companion Response Selection
//!
//! File: cli/src/responder/mod.rs
//!
//! ## Overview
//!
//! Given the latest user utterance and the most recently logged mood, a
//! `Responder` produces the companion's reply. Two interchangeable strategies
//! exist:
//!
//! - **Rules** (`RuleResponder`): lowercases the input and walks an ordered
//!   list of keyword rules; the first match wins.
//! - **Pipeline** (`PipelineResponder`): hands the input to an external
//!   conversational generator and returns its latest response, answering with
//!   a fixed fallback message whenever generation fails.
//!
//! ## Architecture
//!
//! - `rules`: the keyword rule table and `RuleResponder`.
//! - `pipeline`: the `ConversationPipeline` trait, `PipelineResponder`, and
//!   the fallback reply.
//! - `command`: `CommandPipeline`, the generator backed by an external program.
//!
//! The generator is built once by `build_responder` before the first
//! submission and owned by the returned responder for the rest of the
//! process. Building it is the only fallible step; a failure there is fatal
//! to the chat session and is never downgraded to the rule strategy.
//!
use crate::core::config::PipelineConfig;
use crate::core::error::Result;
use crate::session::Mood;
use serde::Deserialize;
use tracing::info;

mod command;
mod pipeline;
mod rules;

pub use command::CommandPipeline;
pub use pipeline::{ConversationPipeline, PipelineResponder, FALLBACK_REPLY};
pub use rules::RuleResponder;

/// Produces the companion's reply to one utterance.
pub trait Responder {
    /// `mood` is the most recently logged mood (`Neutral` when none).
    /// Not every strategy uses it.
    fn respond(&self, input: &str, mood: Mood) -> String;
}

/// Which response strategy a session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Ordered keyword rules with canned replies.
    #[default]
    Rules,
    /// Delegate to the configured external generator.
    Pipeline,
}

/// # Build Responder (`build_responder`)
///
/// Constructs the responder for `strategy`. For `Strategy::Pipeline` this
/// connects to the generator described by `config` and fails with
/// `CompanionError::PipelineUnavailable` or
/// `CompanionError::PipelineConstruction` if it cannot be used.
pub fn build_responder(strategy: Strategy, config: &PipelineConfig) -> Result<Box<dyn Responder>> {
    info!("Using {:?} response strategy", strategy);
    match strategy {
        Strategy::Rules => Ok(Box::new(RuleResponder)),
        Strategy::Pipeline => {
            let pipeline = CommandPipeline::connect(config)?;
            Ok(Box::new(PipelineResponder::with_template(
                pipeline,
                config.prompt_template.clone(),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CompanionError;

    #[test]
    fn rules_strategy_always_builds() {
        let responder = build_responder(Strategy::Rules, &PipelineConfig::default()).unwrap();
        assert!(responder
            .respond("I feel sad", Mood::Neutral)
            .starts_with("I'm sorry to hear"));
    }

    #[test]
    fn pipeline_strategy_without_command_fails() {
        let err = build_responder(Strategy::Pipeline, &PipelineConfig::default())
            .err()
            .expect("construction should fail");
        assert!(matches!(
            err.downcast_ref::<CompanionError>(),
            Some(CompanionError::PipelineConstruction(_))
        ));
    }

    #[test]
    fn strategy_parses_from_cli_value() {
        use clap::ValueEnum;
        assert_eq!(Strategy::from_str("pipeline", true), Ok(Strategy::Pipeline));
        assert_eq!(Strategy::from_str("rules", true), Ok(Strategy::Rules));
    }
}
