//! # Companion Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Thin wrapper around `std::process::Command` for running an external
//! program to completion with some text on its standard input and capturing
//! what it prints. The conversational generator used by the pipeline strategy
//! is driven through `run_command_capture`.
//!
//! ## Error Handling
//!
//! Failing to start the program (not found, permission denied) is returned as
//! an error with context, and so is a program still running when the timeout
//! expires (it is killed first). A program that starts and exits non-zero is
//! *not* an error at this level; callers inspect `CommandOutput::status`.
//!
use crate::core::error::Result;
use anyhow::{anyhow, Context};
use std::io::{Read, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, warn};
use wait_timeout::ChildExt;

/// Captured result of a finished process.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// # Run Command Capture (`run_command_capture`)
///
/// Runs `cmd` with `args`, writes `input` to its stdin (then closes it), and
/// waits up to `timeout` for it to exit. Stdout and stderr are captured as
/// lossy UTF-8.
///
/// Stdin is fed and both output pipes are drained on separate threads, so a
/// program that produces a lot of output before reading all of its input
/// cannot deadlock against us.
pub fn run_command_capture(
    cmd: &str,
    args: &[String],
    input: &str,
    timeout: Duration,
) -> Result<CommandOutput> {
    debug!("Running command: {} {:?} (timeout {:?})", cmd, args, timeout);

    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to start '{}'", cmd))?;

    let writer = child.stdin.take().map(|mut stdin| {
        let data = input.to_owned();
        thread::spawn(move || {
            // The child may exit without reading its input (broken pipe).
            if let Err(e) = stdin.write_all(data.as_bytes()) {
                warn!("Failed to write to child stdin: {}", e);
            }
        })
    });
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let status = match child
        .wait_timeout(timeout)
        .with_context(|| format!("Failed to wait for '{}'", cmd))?
    {
        Some(status) => status,
        None => {
            warn!("Command '{}' still running after {:?}, killing it", cmd, timeout);
            if let Err(e) = child.kill() {
                warn!("Failed to kill '{}': {}", cmd, e);
            }
            let _ = child.wait();
            // Reader threads are left detached: a grandchild may still hold the pipes.
            return Err(anyhow!("'{}' did not finish within {:?}", cmd, timeout));
        }
    };

    if let Some(handle) = writer {
        let _ = handle.join();
    }

    debug!("Command '{}' exited with {}", cmd, status);
    Ok(CommandOutput {
        status,
        stdout: collect(stdout),
        stderr: collect(stderr),
    })
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Err(e) = pipe.read_to_end(&mut buf) {
            warn!("Failed to read child output: {}", e);
        }
        buf
    })
}

fn collect(reader: Option<JoinHandle<Vec<u8>>>) -> String {
    let bytes = reader
        .map(|handle| handle.join().unwrap_or_default())
        .unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}
