//! Timestamp parsing for server records.
//!
//! The backend emits ISO 8601 timestamps, sometimes without an offset. Naive
//! timestamps are taken to be UTC.

use crate::errors::{DomainError, DomainResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a server timestamp into UTC.
///
/// Accepts RFC 3339 (`2024-01-10T12:00:00Z`, `2024-01-10T12:00:00+02:00`) and
/// offset-less ISO 8601 (`2024-01-10T12:00:00.123456`).
pub fn parse(value: &str) -> DomainResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
        .ok_or_else(|| DomainError::InvalidTimestamp(value.to_string()))
}

/// Serde adapter for required timestamp fields
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

/// Serde adapter for optional timestamp fields
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse(&raw).map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
