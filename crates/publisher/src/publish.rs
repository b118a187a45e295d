//! The publish operation: build the payload, run the CLI, relay its output.

use std::io::Write;

use holidays_core::{
    build_environment_argument, missing_keys, parse_update_response, HolidayTable,
};

use crate::command::UpdateFunctionConfiguration;
use crate::config::PublishConfig;
use crate::error::{PublishError, Result};
use crate::output::relay_output;
use crate::runner::{CommandOutput, CommandRunner};

/// Switches for a single publish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishOptions {
    /// Build the command but do not run it.
    pub dry_run: bool,
    /// Turn an unsuccessful CLI exit into an error. Off by default: the
    /// CLI's exit status is otherwise only logged.
    pub fail_on_error: bool,
}

/// What a publish did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Nothing was run.
    DryRun { command: UpdateFunctionConfiguration },
    /// The CLI ran; its output has been relayed.
    Completed { output: CommandOutput },
}

/// Pure function: Build the provider call for a table.
pub fn prepare(
    config: &PublishConfig,
    table: &HolidayTable,
) -> Result<UpdateFunctionConfiguration> {
    let environment = build_environment_argument(table)?;
    Ok(UpdateFunctionConfiguration::new(config, environment))
}

/// Publishes `table` as the complete environment of the configured function.
pub fn publish<R, W>(
    config: &PublishConfig,
    table: &HolidayTable,
    runner: &R,
    writer: &mut W,
    options: PublishOptions,
) -> Result<PublishOutcome>
where
    R: CommandRunner + ?Sized,
    W: Write,
{
    let command = prepare(config, table)?;

    if options.dry_run {
        tracing::debug!(function = %config.function_name, "dry run, not invoking CLI");
        return Ok(PublishOutcome::DryRun { command });
    }

    tracing::info!(
        function = %config.function_name,
        region = %config.region,
        variables = table.len(),
        "replacing function environment"
    );

    let output = runner.run(&config.program, &command.args())?;
    relay_output(&output, writer)?;

    if !output.success() {
        tracing::warn!(
            status = %output.status_display(),
            "provider CLI exited unsuccessfully"
        );
        if options.fail_on_error {
            return Err(PublishError::CommandFailed {
                status: output.status_display(),
            });
        }
    } else {
        report_response(table, &output);
    }

    Ok(PublishOutcome::Completed { output })
}

/// Logs what the function reports after the update.
fn report_response(table: &HolidayTable, output: &CommandOutput) {
    let Some(configuration) = parse_update_response(&output.stdout) else {
        tracing::debug!("CLI output is not a function configuration document");
        return;
    };

    tracing::info!(
        status = configuration.last_update_status.as_deref().unwrap_or("unknown"),
        variables = configuration.variables().map_or(0, |v| v.len()),
        "function configuration updated"
    );

    let missing = missing_keys(table, &configuration);
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|key| key.as_str()).collect();
        tracing::warn!(missing = %names.join(","), "response is missing holiday variables");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use holidays_core::builtin_holiday_table;

    use super::*;

    /// Records every call and answers with a canned output.
    struct FakeRunner {
        output: CommandOutput,
        calls: RefCell<Vec<(String, Vec<String>)>>,
    }

    impl FakeRunner {
        fn new(output: CommandOutput) -> Self {
            Self {
                output,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec()));
            Ok(self.output.clone())
        }
    }

    struct SpawnFailure;

    impl CommandRunner for SpawnFailure {
        fn run(&self, program: &str, _args: &[String]) -> Result<CommandOutput> {
            Err(PublishError::Spawn {
                program: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
        }
    }

    fn config() -> PublishConfig {
        PublishConfig {
            function_name: "mcp-server-function".to_string(),
            region: "eu-north-1".to_string(),
            program: "aws".to_string(),
        }
    }

    fn succeeded(stdout: &str) -> CommandOutput {
        CommandOutput {
            stdout: stdout.to_string(),
            stderr: String::new(),
            code: Some(0),
        }
    }

    fn failed(stderr: &str) -> CommandOutput {
        CommandOutput {
            stdout: String::new(),
            stderr: stderr.to_string(),
            code: Some(254),
        }
    }

    fn run(runner: &FakeRunner, options: PublishOptions) -> (Result<PublishOutcome>, String) {
        let table = builtin_holiday_table().unwrap();
        let mut buffer = Vec::new();
        let result = publish(&config(), &table, runner, &mut buffer, options);
        (result, String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn test_publish_invokes_cli_once_with_full_command() {
        let runner = FakeRunner::new(succeeded("{}"));
        let (result, _) = run(&runner, PublishOptions::default());

        assert!(matches!(result, Ok(PublishOutcome::Completed { .. })));

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);

        let (program, args) = &calls[0];
        assert_eq!(program, "aws");
        assert_eq!(
            &args[..5],
            &[
                "lambda",
                "update-function-configuration",
                "--function-name",
                "mcp-server-function",
                "--environment",
            ]
        );
        assert!(args[5].starts_with("Variables={HOLIDAYS_UK="));
        assert_eq!(&args[6..], &["--region", "eu-north-1"]);
    }

    #[test]
    fn test_publish_relays_stdout_without_error_line() {
        let runner = FakeRunner::new(succeeded("{\"FunctionName\": \"mcp-server-function\"}"));
        let (_, printed) = run(&runner, PublishOptions::default());

        assert_eq!(printed, "{\"FunctionName\": \"mcp-server-function\"}\n");
        assert!(!printed.contains("Error:"));
    }

    #[test]
    fn test_publish_relays_stderr_and_ignores_exit_status() {
        let stderr = "An error occurred (ResourceNotFoundException) when calling the UpdateFunctionConfiguration operation: Function not found";
        let runner = FakeRunner::new(failed(stderr));
        let (result, printed) = run(&runner, PublishOptions::default());

        assert!(matches!(result, Ok(PublishOutcome::Completed { .. })));
        assert!(printed
            .lines()
            .any(|line| line == format!("Error: {}", stderr)));
    }

    #[test]
    fn test_publish_fail_on_error() {
        let runner = FakeRunner::new(failed("boom"));
        let options = PublishOptions {
            fail_on_error: true,
            ..Default::default()
        };
        let (result, printed) = run(&runner, options);

        assert!(matches!(
            result,
            Err(PublishError::CommandFailed { ref status }) if status == "exit code 254"
        ));
        // Output is relayed before failing
        assert_eq!(printed, "Error: boom\n");
    }

    #[test]
    fn test_publish_fail_on_error_with_success() {
        let runner = FakeRunner::new(succeeded(""));
        let options = PublishOptions {
            fail_on_error: true,
            ..Default::default()
        };
        let (result, printed) = run(&runner, options);

        assert!(result.is_ok());
        assert_eq!(printed, "");
    }

    #[test]
    fn test_publish_dry_run_does_not_invoke() {
        let runner = FakeRunner::new(succeeded("{}"));
        let options = PublishOptions {
            dry_run: true,
            ..Default::default()
        };
        let (result, printed) = run(&runner, options);

        match result {
            Ok(PublishOutcome::DryRun { command }) => {
                assert_eq!(command.function_name, "mcp-server-function");
                assert!(command.environment.starts_with("Variables={"));
            }
            other => panic!("expected dry run, got {:?}", other),
        }
        assert!(runner.calls.borrow().is_empty());
        assert_eq!(printed, "");
    }

    #[test]
    fn test_publish_spawn_failure_is_an_error() {
        let table = builtin_holiday_table().unwrap();
        let mut buffer = Vec::new();
        let result = publish(
            &config(),
            &table,
            &SpawnFailure,
            &mut buffer,
            PublishOptions::default(),
        );

        assert!(matches!(result, Err(PublishError::Spawn { .. })));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_prepare_is_deterministic() {
        let table = builtin_holiday_table().unwrap();
        let first = prepare(&config(), &table).unwrap();
        let second = prepare(&config(), &table).unwrap();

        assert_eq!(first.args(), second.args());
    }
}
