//! Canonical text form for record timestamps.
//!
//! The dataset stores creation times as ISO-8601 strings with a `Z` suffix
//! and at least millisecond precision. The same text is used when a
//! timestamp takes part in filter comparisons, so formatting and parsing
//! live together here.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// Three fractional digits are always written; six or nine are used when
/// the instant carries micro- or nanosecond detail, so no precision is lost
/// and each instant has exactly one canonical form.
#[must_use]
pub fn canonical(ts: &DateTime<Utc>) -> String {
    let nanos = ts.nanosecond() % 1_000_000_000;
    let format = if nanos % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else if nanos % 1_000 == 0 {
        SecondsFormat::Micros
    } else {
        SecondsFormat::Nanos
    };
    ts.to_rfc3339_opts(format, true)
}

/// Parses any RFC 3339 timestamp and normalizes it to UTC.
pub fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|ts| ts.with_timezone(&Utc))
}

/// Serde adapter for `#[serde(with = "timestamp")]` fields.
pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&canonical(ts))
}

/// Serde adapter for `#[serde(with = "timestamp")]` fields.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}
