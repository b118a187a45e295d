//! Built-in holiday table (Functional Core - pure data).

use super::error::Result;
use super::types::{HolidayInterval, HolidayTable, RegionKey};

/// Region name followed by its `(start, end)` pairs, in publish order.
const BUILTIN_HOLIDAYS: &[(&str, &[(&str, &str)])] = &[
    ("UK", &[("2026-12-25T00:00+00:00", "2026-12-28T23:59+00:00")]),
    ("US", &[("2026-12-25T00:00-05:00", "2026-12-26T23:59-05:00")]),
    (
        "INDIA",
        &[
            ("2026-01-26T00:00+05:30", "2026-01-26T23:59+05:30"),
            ("2026-03-08T00:00+05:30", "2026-03-08T23:59+05:30"),
        ],
    ),
    (
        "AUSTRALIA",
        &[("2026-01-26T00:00+10:00", "2026-01-26T23:59+10:00")],
    ),
    ("JAPAN", &[("2026-01-12T00:00+09:00", "2026-01-12T23:59+09:00")]),
    (
        "GERMANY",
        &[("2026-12-25T00:00+01:00", "2026-12-26T23:59+01:00")],
    ),
    ("FRANCE", &[("2026-12-25T00:00+01:00", "2026-12-25T23:59+01:00")]),
    (
        "SINGAPORE",
        &[("2026-01-29T00:00+08:00", "2026-02-01T23:59+08:00")],
    ),
    ("BRAZIL", &[("2026-12-25T00:00-03:00", "2026-12-25T23:59-03:00")]),
    ("NZ", &[("2026-01-02T00:00+13:00", "2026-01-02T23:59+13:00")]),
];

/// Returns the holiday table published to the function.
/// This is a pure function - no I/O.
pub fn builtin_holiday_table() -> Result<HolidayTable> {
    let mut table = HolidayTable::new();

    for (region, periods) in BUILTIN_HOLIDAYS {
        let intervals = periods
            .iter()
            .map(|(start, end)| HolidayInterval::parse(start, end))
            .collect::<Result<Vec<_>>>()?;

        table.insert(RegionKey::for_region(region)?, intervals);
    }

    Ok(table)
}
