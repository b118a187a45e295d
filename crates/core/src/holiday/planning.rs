//! Pure functions for describing a publish before it happens (Functional Core).

use super::types::HolidayTable;

/// Pure function: Format the planned environment replacement for display.
pub fn format_publish_plan(table: &HolidayTable, function_name: &str, region: &str) -> Vec<String> {
    let mut lines = vec![format!(
        "~ Replace environment of function: {} (region: {})",
        function_name, region
    )];

    for entry in table.iter() {
        let noun = if entry.intervals.len() == 1 {
            "interval"
        } else {
            "intervals"
        };
        lines.push(format!(
            "  + {} ({} {})",
            entry.key,
            entry.intervals.len(),
            noun
        ));
        for interval in &entry.intervals {
            lines.push(format!("    {}", interval));
        }
    }

    lines.push("- Variables not listed above will be removed".to_string());
    lines
}
