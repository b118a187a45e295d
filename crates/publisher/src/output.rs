//! Console output for publish results and the `show` command.

use std::io::Write;

use holidays_core::HolidayTable;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::runner::CommandOutput;

/// Relays the provider CLI's output.
///
/// Stdout is written as captured when it is non-empty. Non-empty stderr is
/// written as `Error: <stderr>`, verbatim. Each block ends with a newline.
pub fn relay_output<W: Write>(output: &CommandOutput, writer: &mut W) -> Result<()> {
    if !output.stdout.is_empty() {
        writeln!(writer, "{}", output.stdout)?;
    }
    if !output.stderr.is_empty() {
        writeln!(writer, "Error: {}", output.stderr)?;
    }
    Ok(())
}

/// Renders the holiday table in the requested format.
pub fn format_table(table: &HolidayTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)?),
        OutputFormat::Pretty => Ok(format_table_pretty(table)),
    }
}

fn format_table_pretty(table: &HolidayTable) -> String {
    let mut lines = Vec::with_capacity(table.len() + table.interval_count());
    for region in table.iter() {
        lines.push(format!("{}:", region.key.region()));
        for interval in &region.intervals {
            lines.push(format!("  {}", interval));
        }
    }
    lines.join("\n")
}
