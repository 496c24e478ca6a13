//! Core domain logic for the overlap checker.
//!
//! This crate contains the fundamental types and logic for:
//! - Duration parsing: turning "7 days" or "90" into seconds
//! - Timestamp deltas: time-of-day differences between two entry timestamps
//! - Validation: finding entries that start before the previous one stopped

pub mod duration;
pub mod entry;
pub mod timestamp;
mod validate;

pub use duration::{ParseDurationError, Unit, parse_duration};
pub use entry::TimeEntry;
pub use timestamp::{TimestampFormatError, seconds_of_day, time_diff};
pub use validate::{API_ENTRY_LIMIT, Overlap, Report, sort_by_start, validate};
