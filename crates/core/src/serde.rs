//! Serde helper functions for holiday timestamps.
//!
//! Holiday boundaries are written at minute precision with an explicit UTC
//! offset (`2026-12-25T00:00+00:00`), which is not valid RFC 3339. These
//! helpers read that form (and full RFC 3339 as a fallback) and write it back
//! unchanged.

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

/// Minute-precision timestamp format with a `+HH:MM` offset.
pub const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";

/// Parse a holiday timestamp.
/// Accepts formats: YYYY-MM-DDTHH:MM±HH:MM or RFC 3339
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_str(s, MINUTE_FORMAT).or_else(|_| DateTime::parse_from_rfc3339(s))
}

/// Format a holiday timestamp, keeping seconds only when they are set.
pub fn format_timestamp(value: &DateTime<FixedOffset>) -> String {
    if value.second() == 0 && value.nanosecond() == 0 {
        value.format(MINUTE_FORMAT).to_string()
    } else {
        value.to_rfc3339()
    }
}

/// `#[serde(with = "...")]` module for holiday timestamps.
pub mod minute_datetime {
    use super::*;

    pub fn serialize<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_timestamp(&s).map_err(serde::de::Error::custom)
    }
}
