//! Time-of-day arithmetic on entry timestamps.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// `THH:MM:SS` immediately followed by a `+HH:MM` offset or `Z`.
static TIME_OF_DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"T(\d\d):(\d\d):(\d\d)[+Z]").unwrap());

/// A timestamp did not contain a recognizable time of day.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid timestamp: {timestamp}")]
pub struct TimestampFormatError {
    pub timestamp: String,
}

/// Seconds since midnight for the time-of-day component of `timestamp`.
///
/// The date and the zone offset are not taken into account.
pub fn seconds_of_day(timestamp: &str) -> Result<i64, TimestampFormatError> {
    let invalid = || TimestampFormatError {
        timestamp: timestamp.to_string(),
    };
    let caps = TIME_OF_DAY_RE.captures(timestamp).ok_or_else(invalid)?;

    let field = |i: usize| caps[i].parse::<i64>().map_err(|_| invalid());
    Ok(field(1)? * 3600 + field(2)? * 60 + field(3)?)
}

/// Signed difference `b - a` in seconds, using only the time of day.
///
/// Timestamps on different dates compare as if they were on the same day.
pub fn time_diff(a: &str, b: &str) -> Result<i64, TimestampFormatError> {
    Ok(seconds_of_day(b)? - seconds_of_day(a)?)
}
