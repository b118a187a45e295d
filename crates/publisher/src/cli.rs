//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{PublishConfig, DEFAULT_FUNCTION_NAME, DEFAULT_PROGRAM, DEFAULT_REGION};

/// Publish regional holidays to a serverless function's environment.
#[derive(Debug, Parser)]
#[command(name = "holidays-publish")]
#[command(version, about, long_about = "Publish regional holidays to a serverless function's environment.

Without a subcommand, replaces ALL environment variables of the target
function with the built-in holiday table by calling:

  aws lambda update-function-configuration --function-name <FN> \\
      --environment Variables={HOLIDAYS_UK=...,...} --region <REGION>

Variables not in the table are removed from the function. The CLI's output
is printed as is; its error output is printed prefixed with 'Error:'.")]
pub struct Cli {
    #[command(flatten)]
    pub global: Global,

    /// Function whose environment is replaced.
    #[arg(long, env = "HOLIDAYS_FUNCTION_NAME", default_value = DEFAULT_FUNCTION_NAME)]
    pub function_name: String,

    /// Region the function is deployed in.
    #[arg(long, env = "HOLIDAYS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Provider CLI executable.
    #[arg(long, env = "HOLIDAYS_AWS_CLI", default_value = DEFAULT_PROGRAM)]
    pub aws_cli: String,

    /// Print the plan and the command without running it.
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error when the provider CLI exits unsuccessfully.
    #[arg(long)]
    pub fail_on_error: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn publish_config(&self) -> PublishConfig {
        PublishConfig {
            function_name: self.function_name.clone(),
            region: self.region.clone(),
            program: self.aws_cli.clone(),
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Silence status output
    #[clap(long, global = true)]
    pub silent: bool,

    /// Enable verbose output
    #[clap(long, global = true)]
    pub verbose: bool,
}

impl Global {
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON object keyed by variable name.
    Json,
    /// Human-readable listing.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the built-in holiday table.
    Show {
        /// Output format.
        #[arg(long, default_value = "pretty")]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_without_arguments() {
        let cli = Cli::try_parse_from(["holidays-publish"]).unwrap();

        assert!(cli.command.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.fail_on_error);
        assert!(!cli.global.is_silent());
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "holidays-publish",
            "--function-name",
            "holidays-staging",
            "--region",
            "us-east-1",
            "--aws-cli",
            "/opt/aws/bin/aws",
            "--dry-run",
            "--fail-on-error",
        ])
        .unwrap();

        let config = cli.publish_config();
        assert_eq!(config.function_name, "holidays-staging");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.program, "/opt/aws/bin/aws");
        assert!(cli.dry_run);
        assert!(cli.fail_on_error);
    }

    #[test]
    fn test_parse_show_json() {
        let cli = Cli::try_parse_from(["holidays-publish", "show", "--format", "json", "--silent"])
            .unwrap();

        assert!(matches!(
            cli.command,
            Some(Commands::Show {
                format: OutputFormat::Json
            })
        ));
        assert!(cli.global.is_silent());
    }
}
