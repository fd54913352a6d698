//! # Companion CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! ## Overview
//!
//! Drives `companion chat` through stdin and checks what it prints.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_chat_scenario() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "[chat]\ntimestamp_format = \"T1\"\n");

    companion_cmd()
        .arg("chat")
        .arg("--config")
        .arg(&config)
        .write_stdin("/mood Sad\nI'm feeling really down today\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mental Wellness Companion"))
        .stdout(predicate::str::contains("Mood 'Sad' logged at T1 😢"))
        .stdout(predicate::str::contains("📊 Mood History\nT1: Sad 😢\n"))
        .stdout(predicate::str::contains(
            "**Companion:** I'm sorry to hear you're feeling this way.",
        ))
        .stdout(predicate::str::contains("Privacy & Ethics"));
}

#[test]
fn test_chat_survives_invalid_utf8_input() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "");

    companion_cmd()
        .arg("chat")
        .arg("--config")
        .arg(&config)
        .write_stdin(b"hello\ncaf\xe9 sad\nI'm worried\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("**Companion:** Anxiety can be overwhelming."))
        .stdout(predicate::str::contains("Privacy & Ethics"));
}

#[test]
fn test_chat_is_default_command_and_ends_on_eof() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "");

    companion_cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin("anything about coping?\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Take a short walk"))
        .stdout(predicate::str::contains("Privacy & Ethics"));
}

#[test]
fn test_chat_mood_history_shows_last_five() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "");
    let script = "/mood happy\n/mood sad\n/mood angry\n/mood neutral\n/mood anxious\n/mood happy\n/history\n";

    let output = companion_cmd()
        .arg("chat")
        .arg("--config")
        .arg(&config)
        .write_stdin(script)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let history = stdout
        .rsplit("📊 Mood History\n")
        .next()
        .unwrap()
        .lines()
        .take(5)
        .map(|line| line.rsplit(": ").next().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        history,
        vec!["Happy 😊", "Anxious 😰", "Neutral 😐", "Angry 😠", "Sad 😢"]
    );
}

#[test]
fn test_chat_pipeline_construction_failure_halts_before_prompt() {
    let dir = tempdir().unwrap();
    let config = write_config(
        dir.path(),
        "[chat]\nstrategy = \"pipeline\"\n[pipeline]\ncommand = \"companion-no-such-generator\"\n",
    );

    companion_cmd()
        .arg("chat")
        .arg("--config")
        .arg(&config)
        .write_stdin("hello\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("You:").not())
        .stderr(predicate::str::contains("is not available"));
}
