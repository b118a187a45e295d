use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::error::{HolidayError, Result};

/// Prefix shared by every holiday environment variable.
pub const KEY_PREFIX: &str = "HOLIDAYS_";

/// A holiday period with offset-aware start and end timestamps.
///
/// Field order matters: the remote function expects `start` before `end`
/// in the encoded JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidayInterval {
    #[serde(with = "crate::serde::minute_datetime")]
    pub start: DateTime<FixedOffset>,
    #[serde(with = "crate::serde::minute_datetime")]
    pub end: DateTime<FixedOffset>,
}

impl HolidayInterval {
    /// Creates an interval from already parsed timestamps.
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self { start, end }
    }

    /// Parses an interval from two timestamp strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: parse(start)?,
            end: parse(end)?,
        })
    }

    /// Returns true if `start` is no later than `end`.
    /// Compared as instants, so differing offsets are handled.
    pub fn is_chronological(&self) -> bool {
        self.start <= self.end
    }
}

impl fmt::Display for HolidayInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            crate::serde::format_timestamp(&self.start),
            crate::serde::format_timestamp(&self.end)
        )
    }
}

fn parse(value: &str) -> Result<DateTime<FixedOffset>> {
    crate::serde::parse_timestamp(value).map_err(|source| HolidayError::InvalidTimestamp {
        value: value.to_string(),
        source,
    })
}

/// Name of a holiday environment variable, e.g. `HOLIDAYS_UK`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionKey(String);

impl RegionKey {
    /// Creates a key from a full variable name.
    ///
    /// Lambda environment keys must start with a letter and contain only
    /// letters, digits and underscores.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let mut chars = key.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if valid {
            Ok(Self(key))
        } else {
            Err(HolidayError::InvalidRegionKey(key))
        }
    }

    /// Creates a key for a region name: `UK` becomes `HOLIDAYS_UK`.
    pub fn for_region(region: &str) -> Result<Self> {
        Self::new(format!("{KEY_PREFIX}{}", region.to_ascii_uppercase()))
    }

    /// Returns the region part of the key, without the `HOLIDAYS_` prefix.
    pub fn region(&self) -> &str {
        self.0.strip_prefix(KEY_PREFIX).unwrap_or(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// All holiday intervals published under one region key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionHolidays {
    pub key: RegionKey,
    pub intervals: Vec<HolidayInterval>,
}

/// Ordered mapping from region key to its holiday intervals.
///
/// Insertion order is preserved so the published argument is byte-identical
/// across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayTable {
    regions: Vec<RegionHolidays>,
}

impl HolidayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a region, replacing the intervals if the key is already present.
    pub fn with_region(mut self, key: RegionKey, intervals: Vec<HolidayInterval>) -> Self {
        self.insert(key, intervals);
        self
    }

    /// Inserts a region, keeping the original position of an existing key.
    pub fn insert(&mut self, key: RegionKey, intervals: Vec<HolidayInterval>) {
        match self.regions.iter_mut().find(|r| r.key == key) {
            Some(existing) => existing.intervals = intervals,
            None => self.regions.push(RegionHolidays { key, intervals }),
        }
    }

    pub fn get(&self, key: &RegionKey) -> Option<&[HolidayInterval]> {
        self.regions
            .iter()
            .find(|r| &r.key == key)
            .map(|r| r.intervals.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionHolidays> {
        self.regions.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &RegionKey> {
        self.regions.iter().map(|r| &r.key)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Total number of intervals across all regions.
    pub fn interval_count(&self) -> usize {
        self.regions.iter().map(|r| r.intervals.len()).sum()
    }
}

/// Serializes as a JSON object keyed by variable name, in table order.
impl Serialize for HolidayTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.regions.len()))?;
        for region in &self.regions {
            map.serialize_entry(region.key.as_str(), &region.intervals)?;
        }
        map.end()
    }
}
