//! Pure functions for building the `--environment` argument.

use super::encoding::encode_intervals;
use super::error::Result;
use super::types::{HolidayInterval, HolidayTable, RegionKey};

/// Formats one `KEY=VALUE` segment.
pub fn format_environment_entry(key: &RegionKey, intervals: &[HolidayInterval]) -> Result<String> {
    Ok(format!("{}={}", key, encode_intervals(intervals)?))
}

/// Builds `Variables={KEY=VALUE,...}` for the whole table.
///
/// Publishing this replaces every environment variable of the function:
/// keys missing from the table are removed remotely.
pub fn build_environment_argument(table: &HolidayTable) -> Result<String> {
    let segments = table
        .iter()
        .map(|region| format_environment_entry(&region.key, &region.intervals))
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("Variables={{{}}}", segments.join(",")))
}
