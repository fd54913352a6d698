//! # Keyword Rule Responder
//!
//! File: cli/src/responder/rules.rs
//!
//! ## Overview
//!
//! `RuleResponder` answers with canned replies chosen by keyword containment.
//! The input is lowercased and checked against `RULES` in order; the first
//! rule with a matching keyword supplies the reply, and `DEFAULT_REPLY` is used
//! when none match. Matching is plain substring containment, so "download"
//! still counts as "down".
//!
//! Because the first match wins, rule order is significant: "I feel sad and
//! anxious" is answered by the sadness rule, never the anxiety rule.

use super::Responder;
use crate::session::Mood;
use tracing::debug;

/// A keyword rule: reply with `reply` if any keyword occurs in the input.
struct Rule {
    name: &'static str,
    keywords: &'static [&'static str],
    reply: &'static str,
}

pub(crate) const SADNESS_REPLY: &str = "I'm sorry to hear you're feeling this way. \
Remember, it's okay to have tough days. \
Would you like some coping strategies or resources?";

pub(crate) const ANXIETY_REPLY: &str = "Anxiety can be overwhelming. \
Deep breathing and grounding exercises might help. \
Would you like me to guide you through one?";

pub(crate) const COPING_REPLY: &str = "Here are some coping strategies:\n\
- Practice deep breathing\n\
- Take a short walk\n\
- Write down your thoughts\n\
- Reach out to a trusted friend\n\
Would you like resources for professional help?";

pub(crate) const RESOURCES_REPLY: &str = "Here are some resources you might find helpful:\n\
- National Suicide Prevention Lifeline: 1-800-273-8255\n\
- Crisis Text Line: Text HOME to 741741\n\
- MentalHealth.gov: https://www.mentalhealth.gov\n\
Remember, seeking help is a sign of strength.";

pub(crate) const DEFAULT_REPLY: &str = "Thank you for sharing. How are you feeling today? \
You can tell me about your mood or ask for coping strategies.";

/// Evaluated top to bottom.
const RULES: &[Rule] = &[
    Rule {
        name: "sadness",
        keywords: &["sad", "down", "unhappy", "depressed"],
        reply: SADNESS_REPLY,
    },
    Rule {
        name: "anxiety",
        keywords: &["anxious", "nervous", "worried"],
        reply: ANXIETY_REPLY,
    },
    Rule {
        name: "coping",
        keywords: &["coping"],
        reply: COPING_REPLY,
    },
    Rule {
        name: "resources",
        keywords: &["resource", "help"],
        reply: RESOURCES_REPLY,
    },
];

/// Rule-based responder (Strategy A).
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleResponder;

impl Responder for RuleResponder {
    // The mood is part of the shared interface but plays no part in rule selection.
    fn respond(&self, input: &str, _mood: Mood) -> String {
        let lowered = input.to_lowercase();
        let reply = RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
            .map_or(DEFAULT_REPLY, |rule| {
                debug!("Matched '{}' rule", rule.name);
                rule.reply
            });
        reply.to_string()
    }
}
