// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command execution seam.
//
// Everything Satzwerk knows about the print system arrives as text from the
// CUPS command-line tools, so the single trait below is the only boundary
// the manager talks through.  Tests substitute a scripted implementation;
// production uses `tokio::process`.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use satzwerk_core::error::{Result, SatzwerkError};

/// Decoded output of one finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// UTF-8 (lossy) decoded standard output.
    pub stdout: String,
    /// UTF-8 (lossy) decoded standard error.
    pub stderr: String,
    /// Whether the command exited with status zero.
    pub success: bool,
}

impl CommandOutput {
    /// Whether the command produced usable data: stderr alongside an empty
    /// stdout is "no data", not a hard failure.
    pub fn has_data(&self) -> bool {
        !self.stdout.trim().is_empty()
    }
}

/// Runs external commands and returns their decoded output.
///
/// An `Err` means the process could not be started at all.  A process that
/// ran but exited nonzero is reported through [`CommandOutput::success`];
/// whether that is fatal depends on the operation.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

/// Production runner backed by `tokio::process::Command`.
///
/// Output is collected in full before decoding — the driver catalog listing
/// alone can exceed a megabyte of text, so nothing here assumes small
/// buffers or line-at-a-time streaming.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner;

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        debug!(program, ?args, "running command");

        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| SatzwerkError::CommandSpawn {
                command: program.to_string(),
                detail: e.to_string(),
            })?;

        let out = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        };

        if !out.success {
            warn!(
                program,
                status = %output.status,
                stderr = out.stderr.trim(),
                "command exited nonzero"
            );
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_with_empty_stdout_is_no_data() {
        let out = CommandOutput {
            stdout: "  \n".into(),
            stderr: "lpstat: No destinations added.".into(),
            success: false,
        };
        assert!(!out.has_data());
    }

    #[test]
    fn nonempty_stdout_is_data() {
        let out = CommandOutput {
            stdout: "device for a: usb://x/y\n".into(),
            stderr: String::new(),
            success: true,
        };
        assert!(out.has_data());
    }
}
