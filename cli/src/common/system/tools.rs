//! # External Tool Detection (`common::system::tools`)
//!
//! File: cli/src/common/system/tools.rs
//!
//! ## Overview
//!
//! Checks whether an external program is installed and usable by running it
//! once with a cheap set of probe arguments (`--version` by default) and
//! looking at how that went:
//!
//! - the OS could not find the program → `ToolStatus::Missing`
//! - it ran and exited successfully → `ToolStatus::Available`
//! - it ran but exited non-zero → `ToolStatus::Unsupported` (typically an
//!   install too old to understand the probe)
//! - it could not be started for another reason (permissions, not an
//!   executable), or did not exit within the timeout → an error
//!
//! The probe runs with all standard streams detached so that programs that
//! read stdin exit immediately.
//!
use crate::core::error::Result;
use anyhow::{anyhow, Context};
use std::io::ErrorKind;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;
use tracing::{debug, error};
use wait_timeout::ChildExt;

/// Outcome of probing an external program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    Available,
    Missing,
    Unsupported(ExitStatus),
}

/// # Probe Tool (`probe_tool`)
///
/// Runs `cmd_name` with `probe_args` and classifies the result. A probe still
/// running after `timeout` is killed.
///
/// ## Returns
///
/// * `Ok(ToolStatus)` if the OS either ran the program or reported it as not found.
/// * `Err` if starting the program failed for any other reason, or the probe
///   timed out.
pub fn probe_tool(cmd_name: &str, probe_args: &[String], timeout: Duration) -> Result<ToolStatus> {
    debug!("Probing command: {} {:?}", cmd_name, probe_args);

    let spawned = Command::new(cmd_name)
        .args(probe_args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Command '{}' not found (ErrorKind::NotFound).", cmd_name);
            return Ok(ToolStatus::Missing);
        }
        Err(e) => {
            error!("Error executing probe of '{}': {}", cmd_name, e);
            return Err(anyhow::Error::new(e).context(format!("Failed to execute '{}'", cmd_name)));
        }
    };

    match child
        .wait_timeout(timeout)
        .with_context(|| format!("Failed to wait for '{}'", cmd_name))?
    {
        Some(status) if status.success() => {
            debug!("Command '{}' is available", cmd_name);
            Ok(ToolStatus::Available)
        }
        Some(status) => {
            debug!("Probe of '{}' exited with {}", cmd_name, status);
            Ok(ToolStatus::Unsupported(status))
        }
        None => {
            error!("Probe of '{}' did not finish within {:?}", cmd_name, timeout);
            let _ = child.kill();
            let _ = child.wait();
            Err(anyhow!("Probe of '{}' did not finish within {:?}", cmd_name, timeout))
        }
    }
}
