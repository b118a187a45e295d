mod encoding;
mod environment;
mod error;
mod planning;
mod response;
mod table;
mod types;

pub use encoding::{
    decode_intervals, encode_intervals, escape_value, to_spaced_json, unescape_value,
    SpacedFormatter,
};
pub use environment::{build_environment_argument, format_environment_entry};
pub use error::{HolidayError, Result};
pub use planning::format_publish_plan;
pub use response::{
    missing_keys, parse_update_response, EnvironmentResponse, FunctionConfiguration,
};
pub use table::builtin_holiday_table;
pub use types::{HolidayInterval, HolidayTable, RegionHolidays, RegionKey, KEY_PREFIX};
