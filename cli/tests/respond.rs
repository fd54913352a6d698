//! # Companion CLI Respond Integration Tests
//!
//! File: cli/tests/respond.rs
//!
//! ## Overview
//!
//! Integration tests for `companion respond` with both strategies. Pipeline
//! tests use `sh -c` as a stand-in generator, so they only run on Unix.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

fn respond_with_config(contents: &str) -> (tempfile::TempDir, Command) {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), contents);
    let mut cmd = companion_cmd();
    cmd.arg("respond").arg("--config").arg(config);
    (dir, cmd)
}

#[test]
fn test_respond_sadness_rule() {
    let (_dir, mut cmd) = respond_with_config("");
    cmd.args(["I'm", "feeling", "really", "down", "today"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "I'm sorry to hear you're feeling this way.",
        ))
        .stdout(predicate::str::ends_with(
            "Would you like some coping strategies or resources?\n",
        ));
}

#[test]
fn test_respond_priority_sad_before_anxious() {
    let (_dir, mut cmd) = respond_with_config("");
    cmd.arg("I feel SAD and anxious")
        .assert()
        .success()
        .stdout(predicate::str::contains("I'm sorry to hear"))
        .stdout(predicate::str::contains("Anxiety").not());
}

#[test]
fn test_respond_resources() {
    let (_dir, mut cmd) = respond_with_config("");
    cmd.arg("where can I find help?")
        .assert()
        .success()
        .stdout(predicate::str::contains("Crisis Text Line: Text HOME to 741741"));
}

#[test]
fn test_respond_empty_input_prints_nothing() {
    let (_dir, mut cmd) = respond_with_config("");
    cmd.arg("   ").assert().success().stdout("");
}

#[test]
fn test_respond_rejects_unknown_mood() {
    let (_dir, mut cmd) = respond_with_config("");
    cmd.args(["--mood", "sleepy", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown mood 'sleepy'"));
}

#[test]
fn test_respond_strategy_flag_overrides_config() {
    let (_dir, mut cmd) = respond_with_config("[chat]\nstrategy = \"pipeline\"\n");
    cmd.args(["--strategy", "rules", "coping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Here are some coping strategies:"));
}

#[test]
fn test_respond_pipeline_without_command_halts() {
    let (_dir, mut cmd) = respond_with_config("[chat]\nstrategy = \"pipeline\"\n");
    cmd.arg("hello")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "Failed to load the conversational generator",
        ));
}

#[test]
fn test_respond_pipeline_missing_generator_halts() {
    let (_dir, mut cmd) = respond_with_config(
        "[chat]\nstrategy = \"pipeline\"\n[pipeline]\ncommand = \"companion-no-such-generator\"\n",
    );
    cmd.arg("hello")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "'companion-no-such-generator' is not available",
        ));
}

#[cfg(unix)]
#[test]
fn test_respond_pipeline_returns_whole_reply() {
    let (_dir, mut cmd) =
        respond_with_config(&sh_pipeline_config("cat; echo; echo All the best.", "{input}"));
    cmd.arg("hello there")
        .assert()
        .success()
        .stdout("hello there\nAll the best.\n");
}

#[cfg(unix)]
#[test]
fn test_respond_pipeline_keeps_multi_line_reply() {
    let (_dir, mut cmd) = respond_with_config(&sh_pipeline_config(
        "printf 'Here are some ideas:\\\\n- breathe slowly\\\\n- take a walk\\\\n'",
        "{input}",
    ));
    cmd.arg("tips?")
        .assert()
        .success()
        .stdout("Here are some ideas:\n- breathe slowly\n- take a walk\n");
}

#[cfg(unix)]
#[test]
fn test_respond_pipeline_uses_template_and_mood() {
    let (_dir, mut cmd) = respond_with_config(&sh_pipeline_config("cat", "[{mood}] {input}"));
    cmd.args(["--mood", "anxious", "big day tomorrow"])
        .assert()
        .success()
        .stdout("[Anxious] big day tomorrow\n");
}

#[cfg(unix)]
#[test]
fn test_respond_pipeline_failure_uses_fallback() {
    let (_dir, mut cmd) = respond_with_config(&sh_pipeline_config("exit 1", "{input}"));
    cmd.arg("hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("trouble responding right now"));
}
