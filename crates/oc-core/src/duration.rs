//! Human-readable duration parsing ("7 days", "1week", "90").

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Leading digit run followed by whatever remains.
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^([0-9]*)(.*)$").unwrap());

/// Errors produced while parsing duration text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseDurationError {
    /// The unit word is not in the synonym table.
    #[error("unknown time unit: {unit}")]
    UnknownUnit { unit: String },

    /// The count (or count × unit) does not fit in 64 bits.
    #[error("duration out of range: {text}")]
    CountOutOfRange { text: String },
}

/// A unit of time accepted in duration text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    /// A 31-day month.
    Month,
    /// A 365-day year.
    Year,
}

impl Unit {
    /// Number of seconds in one unit.
    #[must_use]
    pub const fn seconds(self) -> u64 {
        match self {
            Self::Second => 1,
            Self::Minute => 60,
            Self::Hour => 3600,
            Self::Day => 86_400,
            Self::Week => 604_800,
            Self::Month => 2_678_400,
            Self::Year => 31_536_000,
        }
    }
}

impl FromStr for Unit {
    type Err = ParseDurationError;

    /// Matches a unit token case-insensitively. Only exact synonyms are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(Self::Second),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(Self::Minute),
            "h" | "hour" | "hours" => Ok(Self::Hour),
            "d" | "day" | "days" => Ok(Self::Day),
            "w" | "week" | "weeks" => Ok(Self::Week),
            "mon" | "month" | "months" => Ok(Self::Month),
            "y" | "year" | "years" => Ok(Self::Year),
            _ => Err(ParseDurationError::UnknownUnit {
                unit: s.to_string(),
            }),
        }
    }
}

/// Parse duration text into a number of seconds.
///
/// The grammar is an optional run of digits (default count 1), optional
/// whitespace, then a unit word (default seconds). Anything after the first
/// whitespace-separated token of the remainder is ignored.
///
/// Supports:
/// - Bare seconds: "90"
/// - Count and unit: "7 days", "7days", "1 week"
/// - Unit only: "hour" (one hour)
pub fn parse_duration(text: &str) -> Result<u64, ParseDurationError> {
    let Some(caps) = DURATION_RE.captures(text) else {
        return Err(ParseDurationError::UnknownUnit {
            unit: text.to_string(),
        });
    };

    let digits = &caps[1];
    let count = if digits.is_empty() {
        1
    } else {
        digits
            .parse::<u64>()
            .map_err(|_| ParseDurationError::CountOutOfRange {
                text: text.to_string(),
            })?
    };

    let unit_token = caps[2].split_whitespace().next().unwrap_or("s");
    let unit: Unit = unit_token.parse()?;

    count
        .checked_mul(unit.seconds())
        .ok_or_else(|| ParseDurationError::CountOutOfRange {
            text: text.to_string(),
        })
}
