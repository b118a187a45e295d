//! holidays-publish entry point.

use anyhow::Result;
use clap::Parser;
use holidays_core::{builtin_holiday_table, format_publish_plan};
use holidays_publisher::cli::{Cli, Commands};
use holidays_publisher::output::format_table;
use holidays_publisher::prelude::*;
use holidays_publisher::{publish, DuctRunner, PublishOptions, PublishOutcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.global.is_verbose() {
        "holidays_publisher=debug"
    } else {
        "holidays_publisher=warn"
    };

    // Logs go to stderr so stdout carries only the relayed CLI output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let table = builtin_holiday_table()?;

    if let Some(Commands::Show { format }) = &cli.command {
        aprintln!("{}", format_table(&table, *format)?);
        return Ok(());
    }

    let config = cli.publish_config();
    let options = PublishOptions {
        dry_run: cli.dry_run,
        fail_on_error: cli.fail_on_error,
    };

    if !cli.global.is_silent() {
        aeprintln!("{} {}", p_b("Target:"), config.target_display());
        aeprintln!(
            "{} {} variables, {} intervals",
            p_b("Table:"),
            table.len(),
            table.interval_count()
        );
        aeprintln!();
    }

    let outcome = {
        let mut stdout = std::io::stdout().lock();
        publish(&config, &table, &DuctRunner, &mut stdout, options)?
    };

    match outcome {
        PublishOutcome::DryRun { command } => {
            aprintln!("{}", p_c("Publish Plan:"));
            for line in format_publish_plan(&table, &config.function_name, &config.region) {
                aprintln!("  {}", p_plan(&line));
            }
            aprintln!();
            aprintln!("{}", p_c("Command:"));
            aprintln!("  {}", command.display(&config.program));
        }
        PublishOutcome::Completed { output } => {
            if !cli.global.is_silent() {
                if output.success() {
                    aeprintln!("{}", p_g("Provider CLI finished."));
                } else {
                    aeprintln!(
                        "{} {}",
                        p_y("Provider CLI finished with"),
                        p_r(&output.status_display())
                    );
                }
            }
        }
    }

    Ok(())
}
