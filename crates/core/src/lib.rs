//! holidays_core - pure data and encoding for the holiday environment publisher.
//!
//! Nothing in this crate performs I/O. The publisher crate owns the process
//! invocation and console output.

pub mod holiday;
pub mod serde;

pub use holiday::{
    build_environment_argument, builtin_holiday_table, decode_intervals, encode_intervals,
    escape_value, format_environment_entry, format_publish_plan, missing_keys,
    parse_update_response, unescape_value, FunctionConfiguration, HolidayError, HolidayInterval,
    HolidayTable, RegionHolidays, RegionKey, Result,
};
