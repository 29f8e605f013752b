//! Parsing and formatting of backend timestamps.
//!
//! The backend emits either RFC 3339 (`2025-03-01T10:00:00Z`) or a naive
//! ISO-8601 datetime (`2025-03-01T10:00:00.123456`). Naive values are read
//! as UTC. Anything unparseable is shown verbatim.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

pub fn parse(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    let with_fraction = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    let without_fraction = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    PrimitiveDateTime::parse(raw, with_fraction)
        .or_else(|_| PrimitiveDateTime::parse(raw, without_fraction))
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// `YYYY-MM-DD`, or the raw string when it does not parse.
pub fn format_date(raw: &str) -> String {
    let fmt = format_description!("[year]-[month]-[day]");
    parse(raw)
        .and_then(|ts| ts.format(fmt).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// `YYYY-MM-DD HH:MM:SS UTC`, or the raw string when it does not parse.
pub fn format_datetime(raw: &str) -> String {
    let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    parse(raw)
        .and_then(|ts| ts.to_offset(time::UtcOffset::UTC).format(fmt).ok())
        .map_or_else(|| raw.to_owned(), |s| format!("{s} UTC"))
}

/// Whole seconds between two timestamps, rounded to nearest.
#[allow(clippy::cast_possible_truncation)]
pub fn elapsed_secs(start: &str, end: &str) -> Option<i64> {
    let elapsed = parse(end)? - parse(start)?;
    Some(elapsed.as_seconds_f64().round() as i64)
}

/// Backend-reported duration as `"{n}s"`, or `-` when absent, zero or NaN.
pub fn format_duration(duration: Option<f64>) -> String {
    match duration.filter(|secs| *secs != 0.0 && !secs.is_nan()) {
        Some(secs) if secs.fract() == 0.0 => format!("{secs:.0}s"),
        Some(secs) => format!("{secs:.1}s"),
        None => "-".to_owned(),
    }
}

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod tests;
