//! # Delegated Generation Responder
//!
//! File: cli/src/responder/pipeline.rs
//!
//! ## Overview
//!
//! `PipelineResponder` (Strategy B) forwards each utterance to a
//! `ConversationPipeline` and answers with the last response the pipeline
//! produced. The pipeline is handed in already constructed, so construction
//! failures happen at startup (see `CommandPipeline::connect`) and the
//! responder itself only has to deal with per-call failures.
//!
//! ## Error Handling
//!
//! Any generation error, and an empty list of responses, yields
//! `FALLBACK_REPLY`. The error is logged and never propagated; the next
//! submission tries the pipeline again. There are no retries.

use super::Responder;
use crate::core::config::{INPUT_PLACEHOLDER, MOOD_PLACEHOLDER};
use crate::core::error::Result;
use crate::session::Mood;
use tracing::{debug, warn};

/// Reply used whenever the pipeline fails to produce a response.
pub const FALLBACK_REPLY: &str =
    "I'm having trouble responding right now. Please try again in a moment.";

/// An external conversational generator.
pub trait ConversationPipeline {
    /// Generates responses to `utterance`, oldest first.
    fn generate(&self, utterance: &str) -> Result<Vec<String>>;
}

/// Responder that delegates to a `ConversationPipeline`.
#[derive(Debug)]
pub struct PipelineResponder<P> {
    pipeline: P,
    prompt_template: String,
}

impl<P: ConversationPipeline> PipelineResponder<P> {
    /// Sends the raw utterance to `pipeline` unchanged.
    pub fn new(pipeline: P) -> Self {
        Self::with_template(pipeline, INPUT_PLACEHOLDER)
    }

    /// Wraps each utterance in `prompt_template` first. `{input}` is replaced
    /// by the utterance and `{mood}` by the last logged mood.
    pub fn with_template(pipeline: P, prompt_template: impl Into<String>) -> Self {
        Self {
            pipeline,
            prompt_template: prompt_template.into(),
        }
    }

    fn render_prompt(&self, input: &str, mood: Mood) -> String {
        // Mood first, so a literal "{mood}" typed by the user is left alone.
        self.prompt_template
            .replace(MOOD_PLACEHOLDER, mood.name())
            .replace(INPUT_PLACEHOLDER, input)
    }
}

impl<P: ConversationPipeline> Responder for PipelineResponder<P> {
    fn respond(&self, input: &str, mood: Mood) -> String {
        let prompt = self.render_prompt(input, mood);
        debug!("Sending prompt to pipeline: {:?}", prompt);

        match self.pipeline.generate(&prompt) {
            Ok(responses) => match responses.into_iter().last() {
                Some(reply) => reply,
                None => {
                    warn!("Pipeline returned no responses");
                    FALLBACK_REPLY.to_string()
                }
            },
            Err(e) => {
                warn!("Pipeline generation failed: {:#}", e);
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
