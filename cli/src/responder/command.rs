//! # Command-backed Conversational Pipeline
//!
//! File: cli/src/responder/command.rs
//!
//! ## Overview
//!
//! `CommandPipeline` uses an external program (for example a local model
//! runner) as the conversational generator. Each generation call starts the
//! program with the configured arguments, writes the prompt to its stdin and
//! takes everything it prints on stdout, trimmed, as one response. Multi-line
//! replies (paragraphs, lists) come back intact. A call that runs longer than
//! `timeout_secs` is killed and counts as a failed generation.
//!
//! ## Construction
//!
//! `connect` runs once at startup and probes the program with `probe_args`:
//! - no command configured, or the probe cannot be executed →
//!   `CompanionError::PipelineConstruction`
//! - program not found, or the probe exits non-zero →
//!   `CompanionError::PipelineUnavailable`
//!
//! Both are fatal to the chat session.

use super::ConversationPipeline;
use crate::common::process;
use crate::common::system::tools::{self, ToolStatus};
use crate::core::config::PipelineConfig;
use crate::core::error::{CompanionError, Result};
use anyhow::anyhow;
use std::time::Duration;
use tracing::{info, warn};

/// Generator backed by an external program.
#[derive(Debug, Clone)]
pub struct CommandPipeline {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandPipeline {
    /// Probes the configured program and returns a pipeline ready to use.
    pub fn connect(config: &PipelineConfig) -> std::result::Result<Self, CompanionError> {
        let command = config.command.trim();
        if command.is_empty() {
            return Err(CompanionError::PipelineConstruction(
                "no generator command configured (set `command` in the [pipeline] section)"
                    .to_string(),
            ));
        }

        let timeout = Duration::from_secs(config.timeout_secs);
        match tools::probe_tool(command, &config.probe_args, timeout) {
            Ok(ToolStatus::Available) => {
                info!("Conversational generator '{}' is ready", command);
                Ok(Self {
                    command: command.to_string(),
                    args: config.args.clone(),
                    timeout,
                })
            }
            Ok(ToolStatus::Missing) => Err(CompanionError::PipelineUnavailable {
                command: command.to_string(),
            }),
            Ok(ToolStatus::Unsupported(status)) => {
                warn!("Generator probe '{}' exited with {}", command, status);
                Err(CompanionError::PipelineUnavailable {
                    command: command.to_string(),
                })
            }
            Err(e) => Err(CompanionError::PipelineConstruction(format!("{:#}", e))),
        }
    }
}

impl ConversationPipeline for CommandPipeline {
    fn generate(&self, utterance: &str) -> Result<Vec<String>> {
        let output =
            process::run_command_capture(&self.command, &self.args, utterance, self.timeout)?;

        if !output.status.success() {
            return Err(anyhow!(CompanionError::Generation(format!(
                "'{}' exited with {}: {}",
                self.command,
                output.status,
                output.stderr.trim()
            ))));
        }

        let reply = output.stdout.trim();
        if reply.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![reply.to_string()])
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::responder::{PipelineResponder, Responder, FALLBACK_REPLY};
    use crate::session::Mood;

    fn sh_config(script: &str) -> PipelineConfig {
        PipelineConfig {
            command: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
            probe_args: vec!["-c".to_string(), "exit 0".to_string()],
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn connect_requires_a_command() {
        let err = CommandPipeline::connect(&PipelineConfig::default()).unwrap_err();
        assert!(matches!(err, CompanionError::PipelineConstruction(_)));
    }

    #[test]
    fn connect_reports_missing_program() {
        let config = PipelineConfig {
            command: "companion-no-such-generator".to_string(),
            ..PipelineConfig::default()
        };
        assert_eq!(
            CommandPipeline::connect(&config).unwrap_err(),
            CompanionError::PipelineUnavailable {
                command: "companion-no-such-generator".to_string()
            }
        );
    }

    #[test]
    fn connect_reports_failed_probe_as_unavailable() {
        let mut config = sh_config("cat");
        config.probe_args = vec!["-c".to_string(), "exit 1".to_string()];
        assert!(matches!(
            CommandPipeline::connect(&config),
            Err(CompanionError::PipelineUnavailable { .. })
        ));
    }

    #[test]
    fn generate_keeps_multi_line_reply_intact() {
        let pipeline = CommandPipeline::connect(&sh_config(
            "printf '\\nHere are some ideas:\\n- breathe slowly\\n- take a walk\\n\\n'",
        ))
        .unwrap();
        let responses = pipeline.generate("tips?").unwrap();
        assert_eq!(
            responses,
            vec!["Here are some ideas:\n- breathe slowly\n- take a walk"]
        );
    }

    #[test]
    fn generate_with_blank_output_has_no_responses() {
        let pipeline = CommandPipeline::connect(&sh_config("echo; echo '   '")).unwrap();
        assert!(pipeline.generate("hi").unwrap().is_empty());
    }

    #[test]
    fn generate_fails_when_program_hangs() {
        let mut config = sh_config("exec sleep 30");
        config.timeout_secs = 1;
        let pipeline = CommandPipeline::connect(&config).unwrap();
        let err = pipeline.generate("hi").unwrap_err();
        assert!(err.to_string().contains("did not finish within"));
    }

    #[test]
    fn generate_fails_on_non_zero_exit() {
        let pipeline = CommandPipeline::connect(&sh_config("echo broken >&2; exit 4")).unwrap();
        let err = pipeline.generate("hi").unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn responder_falls_back_when_program_fails() {
        let pipeline = CommandPipeline::connect(&sh_config("exit 1")).unwrap();
        let responder = PipelineResponder::new(pipeline);
        assert_eq!(responder.respond("hello", Mood::Neutral), FALLBACK_REPLY);
    }

    #[test]
    fn responder_returns_whole_reply() {
        let pipeline =
            CommandPipeline::connect(&sh_config("echo 'Thank you.'; echo 'You are doing well.'"))
                .unwrap();
        let responder = PipelineResponder::new(pipeline);
        assert_eq!(
            responder.respond("hello", Mood::Happy),
            "Thank you.\nYou are doing well."
        );
    }
}
