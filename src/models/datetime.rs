//! Timestamp input as clients send it.
//!
//! Accepts a plain date (`1980-01-01`, read as midnight), a naive
//! timestamp (`1980-01-01T08:30:00`, optional fraction, `T` or space) and
//! RFC 3339 values with `Z` or an offset, which are converted to local time.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn parse_client_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// `deserialize_with` helper for optional client timestamps; `null` is `None`.
pub fn deserialize_client_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_client_datetime(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date or timestamp: {raw}"))),
        None => Ok(None),
    }
}
