//! Overlap detection across chronologically sorted time entries.
//!
//! The pass walks entries in start order and carries a single piece of state,
//! the frontier: the most recent stop time seen so far. An entry starting
//! before the frontier is a candidate overlap and is reported when the
//! time-of-day delta between its start and the frontier is below the allowed
//! window.

use serde::Serialize;

use crate::entry::TimeEntry;
use crate::timestamp::{TimestampFormatError, time_diff};

/// Maximum number of entries the service returns from a single request.
pub const API_ENTRY_LIMIT: usize = 1000;

/// An entry that starts before the previous entry stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlap {
    /// Start of the later entry.
    pub start: String,
    /// Frontier stop time it was compared against.
    pub stop: String,
}

/// Result of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Overlaps in the order they were found.
    pub overlaps: Vec<Overlap>,
    /// Number of entries examined.
    pub checked: usize,
    /// Whether the entry count hit the service limit, meaning results may be truncated.
    pub limit_reached: bool,
}

impl Report {
    /// Whether no overlaps were found.
    pub fn is_clean(&self) -> bool {
        self.overlaps.is_empty()
    }
}

/// Sorts entries by ascending start timestamp, keeping the service order for ties.
pub fn sort_by_start(entries: &mut [TimeEntry]) {
    entries.sort_by(|a, b| a.start.cmp(&b.start));
}

/// Checks sorted entries for overlaps smaller than `allowed_window` seconds.
///
/// Entries must already be sorted by start (see [`sort_by_start`]). A running
/// entry (no stop) is checked against the frontier but never advances it.
///
/// # Errors
///
/// Returns the first malformed timestamp encountered; no partial report is produced.
pub fn validate(
    entries: &[TimeEntry],
    allowed_window: u64,
) -> Result<Report, TimestampFormatError> {
    let window = i64::try_from(allowed_window).unwrap_or(i64::MAX);
    let mut overlaps = Vec::new();
    let mut frontier: Option<&str> = None;

    for entry in entries {
        if let Some(stop) = frontier.filter(|stop| entry.start.as_str() < *stop) {
            let delta = time_diff(&entry.start, stop)?;
            if delta < window {
                tracing::debug!(
                    id = ?entry.id,
                    start = %entry.start,
                    stop,
                    delta,
                    "overlap detected"
                );
                overlaps.push(Overlap {
                    start: entry.start.clone(),
                    stop: stop.to_string(),
                });
            }
        }

        if let Some(stop) = entry.stop.as_deref() {
            frontier = Some(stop);
        }
    }

    let checked = entries.len();
    Ok(Report {
        overlaps,
        checked,
        limit_reached: checked >= API_ENTRY_LIMIT,
    })
}
