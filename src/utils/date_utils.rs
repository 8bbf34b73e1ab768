//! Module for handling timestamp parsing.
//!
//! Admission and discharge timestamps arrive as strings from intake. They may
//! be full RFC 3339 timestamps, naive date-times or plain dates in one of a
//! few common layouts.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Date-time layouts tried after RFC 3339
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Plain date layouts, interpreted as midnight
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", // ISO format: 2023-01-15
    "%d-%m-%Y", // European: 15-01-2023
    "%m/%d/%Y", // US: 01/15/2023
    "%d.%m.%Y", // German/Danish: 15.01.2023
    "%Y%m%d",   // Compact: 20230115
];

/// Parse a timestamp string with multiple format attempts
///
/// Naive inputs (no offset) are treated as UTC. Returns `None` when no
/// layout matches.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    let utc = FixedOffset::east_opt(0)?;

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(utc.from_utc_datetime(&naive));
        }
    }

    parse_date(s).map(|date| utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Parse a plain calendar date
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

/// Calendar date of a timestamp as written, ignoring its offset
#[must_use]
pub fn calendar_date(s: &str) -> Option<NaiveDate> {
    parse_timestamp(s).map(|dt| dt.date_naive())
}

/// Elapsed time between two timestamps in fractional days
///
/// Returns `None` if either side fails to parse. The result can be negative.
#[must_use]
pub fn days_between(start: &str, end: &str) -> Option<f64> {
    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;
    let millis = end.signed_duration_since(start).num_milliseconds();
    Some(millis as f64 / 86_400_000.0)
}

/// Current time as an RFC 3339 string
#[must_use]
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}
