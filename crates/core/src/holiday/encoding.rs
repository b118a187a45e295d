//! Pure functions for encoding holiday intervals as environment values.
//!
//! A value is the JSON array of intervals with `", "` and `": "` separators,
//! escaped so it can sit inside the CLI's `Key=Value,...` shorthand.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use super::error::Result;
use super::types::HolidayInterval;

/// JSON formatter that puts a space after `,` and `:`.
///
/// Matches the layout the remote function was originally seeded with, so
/// re-publishing the same table does not change the stored strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes intervals to spaced JSON text, unescaped.
pub fn to_spaced_json(intervals: &[HolidayInterval]) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedFormatter);
    intervals.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Escapes backslashes and double quotes with a backslash.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + value.len() / 4);
    for c in value.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Reverses [`escape_value`]. A trailing lone backslash is kept as is.
pub fn unescape_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => unescaped.push(next),
                None => unescaped.push('\\'),
            }
        } else {
            unescaped.push(c);
        }
    }
    unescaped
}

/// Encodes intervals as an escaped environment value.
///
/// `[{\"start\": \"2026-12-25T00:00-05:00\", \"end\": \"2026-12-26T23:59-05:00\"}]`
pub fn encode_intervals(intervals: &[HolidayInterval]) -> Result<String> {
    Ok(escape_value(&to_spaced_json(intervals)?))
}

/// Decodes an escaped environment value back into intervals.
///
/// Each object must carry exactly `start` and `end`.
pub fn decode_intervals(value: &str) -> Result<Vec<HolidayInterval>> {
    Ok(serde_json::from_str(&unescape_value(value))?)
}
