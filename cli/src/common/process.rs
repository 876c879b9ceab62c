//! # Devpack Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::process::Command` used to run `pip` and the
//! launched application. Child processes inherit the terminal's stdio so the
//! user sees their output live; callers receive the exit code and decide how
//! to map a failure into `DevpackError`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process;
//! use std::process::Command;
//!
//! let mut cmd = Command::new("python3");
//! cmd.args(["-m", "pip", "--version"]).current_dir(project_root);
//! let code = process::run_streamed(&mut cmd)?;
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs `cmd` with inherited stdio and waits for it.
///
/// Returns the exit code; `-1` stands for termination by a signal.
/// Failing to spawn at all (e.g. the program does not exist) is an `Err`.
pub fn run_streamed(cmd: &mut Command) -> Result<i32> {
    let line = command_line(cmd);
    debug!("Running: {}", line);
    let status = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to start command: {}", line))?;
    debug!("Command '{}' finished with {}", line, status);
    Ok(status.code().unwrap_or(-1))
}

/// Renders a command as a single line for logs and error messages.
pub fn command_line(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
