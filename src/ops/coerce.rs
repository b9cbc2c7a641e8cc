//! Coercion Module
//!
//! Shared string-to-scalar coercion helpers used by the processing routines.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Number;

/// Timestamp-like datetime formats accepted without a UTC offset
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// == Boolean Coercion ==
/// Interprets a trimmed string as a boolean token.
///
/// Accepts `true`/`yes`/`1` and `false`/`no`/`0` in any letter case.
/// Returns None for anything else.
pub fn try_parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

// == Numeric Coercion ==
/// Interprets a trimmed string as a JSON number.
///
/// Strings made up entirely of ASCII digits become integers, everything
/// else goes through a float parse. Values that do not fit a finite JSON
/// number (such as `inf` or `nan`) are rejected.
pub fn try_parse_number(text: &str) -> Option<Number> {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = text.parse::<i64>() {
            return Some(Number::from(n));
        }
        if let Ok(n) = text.parse::<u64>() {
            return Some(Number::from(n));
        }
        // Magnitude exceeds the integer range, fall back to a float
        return text.parse::<f64>().ok().and_then(Number::from_f64);
    }

    let parsed: f64 = text.parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Number::from_f64(parsed)
}

// == Timestamp Coercion ==
/// A timestamp parsed from a string, keeping track of how much the
/// source string actually specified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedTimestamp {
    /// Full datetime with a UTC offset
    Offset(DateTime<FixedOffset>),
    /// Datetime without an offset
    Naive(NaiveDateTime),
    /// Calendar date only
    DateOnly(NaiveDate),
}

impl ParsedTimestamp {
    /// Renders the timestamp in canonical ISO 8601 form.
    ///
    /// Date-only values expand to midnight, offsets are preserved as
    /// `+HH:MM`, and whole seconds carry no fractional part.
    pub fn canonical(&self) -> String {
        match self {
            ParsedTimestamp::Offset(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f%:z").to_string(),
            ParsedTimestamp::Naive(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            ParsedTimestamp::DateOnly(d) => {
                d.and_time(NaiveTime::MIN).format("%Y-%m-%dT%H:%M:%S").to_string()
            }
        }
    }

    /// Returns the timestamp as a naive UTC datetime.
    ///
    /// Offset-free values are taken to already be in UTC.
    pub fn naive_utc(&self) -> NaiveDateTime {
        match self {
            ParsedTimestamp::Offset(dt) => dt.naive_utc(),
            ParsedTimestamp::Naive(dt) => *dt,
            ParsedTimestamp::DateOnly(d) => d.and_time(NaiveTime::MIN),
        }
    }
}

/// Attempts to parse a trimmed string as an ISO 8601 timestamp.
///
/// Tries offset-bearing RFC 3339 first, then offset-free datetimes,
/// then bare calendar dates. Returns None when nothing matches.
pub fn try_parse_timestamp(text: &str) -> Option<ParsedTimestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(ParsedTimestamp::Offset(dt));
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(ParsedTimestamp::Naive(dt));
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(ParsedTimestamp::DateOnly(d));
    }

    None
}
