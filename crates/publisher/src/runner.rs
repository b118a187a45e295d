//! External command capability (Imperative Shell).
//!
//! Publishing only needs "run this program with these arguments, give me
//! what it printed and how it exited". Keeping that behind a trait lets the
//! payload and relay logic be tested without a real `aws` binary.

use std::process::Output;

use crate::error::{PublishError, Result};

/// Captured result of one external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human readable exit status, e.g. `exit code 255`.
    pub fn status_display(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "termination by signal".to_string(),
        }
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        }
    }
}

/// Runs an external command to completion and captures its output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

/// Runs commands with `duct`, blocking until the process exits.
///
/// The exit status is captured, never turned into an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuctRunner;

impl CommandRunner for DuctRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        tracing::debug!(program, args = args.len(), "running command");

        let output = duct::cmd(program, args)
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()
            .map_err(|source| PublishError::Spawn {
                program: program.to_string(),
                source,
            })?;

        Ok(output.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_output_success() {
        let output = CommandOutput {
            code: Some(0),
            ..Default::default()
        };
        assert!(output.success());
        assert_eq!(output.status_display(), "exit code 0");
    }

    #[test]
    fn test_command_output_failure() {
        let output = CommandOutput {
            code: Some(255),
            ..Default::default()
        };
        assert!(!output.success());
        assert_eq!(output.status_display(), "exit code 255");
    }

    #[test]
    fn test_command_output_signal() {
        let output = CommandOutput::default();
        assert!(!output.success());
        assert_eq!(output.status_display(), "termination by signal");
    }

    #[test]
    fn test_duct_runner_missing_program() {
        let result = DuctRunner.run("holidays-publish-no-such-program", &[]);
        assert!(matches!(result, Err(PublishError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_duct_runner_captures_both_streams() {
        let args = vec![
            "-c".to_string(),
            "printf out; printf err >&2; exit 3".to_string(),
        ];
        let output = DuctRunner.run("sh", &args).unwrap();

        assert_eq!(output.stdout, "out");
        assert_eq!(output.stderr, "err");
        assert_eq!(output.code, Some(3));
    }
}
