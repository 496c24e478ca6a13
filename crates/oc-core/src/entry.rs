//! Time entries as returned by the tracking service.

use serde::{Deserialize, Serialize};

/// One recorded interval of tracked time.
///
/// Timestamps are kept as the service sent them; ISO-8601 strings with the
/// same zone suffix sort chronologically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Service-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// When the entry started.
    pub start: String,

    /// When the entry stopped. Absent while the timer is still running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TimeEntry {
    /// Creates an entry with only a start and optional stop.
    pub fn new(start: &str, stop: Option<&str>) -> Self {
        Self {
            id: None,
            start: start.to_string(),
            stop: stop.map(str::to_string),
            description: None,
        }
    }

    /// Whether the timer for this entry is still running.
    pub const fn is_running(&self) -> bool {
        self.stop.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_service_payload_ignoring_extra_fields() {
        let json = r#"{
            "id": 436694100,
            "wid": 777,
            "pid": 193791,
            "billable": false,
            "start": "2018-06-13T12:12:12+00:00",
            "stop": "2018-06-13T13:00:00+00:00",
            "duration": 2868,
            "description": "Meeting with possible clients",
            "tags": ["billed"],
            "at": "2018-06-13T13:00:01+00:00"
        }"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id, Some(436_694_100));
        assert_eq!(entry.start, "2018-06-13T12:12:12+00:00");
        assert_eq!(entry.stop.as_deref(), Some("2018-06-13T13:00:00+00:00"));
        assert_eq!(
            entry.description.as_deref(),
            Some("Meeting with possible clients")
        );
        assert!(!entry.is_running());
    }

    #[test]
    fn test_running_entry_has_no_stop() {
        let json = r#"{"start": "2018-06-13T12:12:12+00:00", "duration": -1528891932}"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();

        assert!(entry.is_running());
        assert_eq!(entry.id, None);
    }

    #[test]
    fn test_missing_start_is_rejected() {
        let result: Result<TimeEntry, _> = serde_json::from_str(r#"{"stop": "x"}"#);
        assert!(result.is_err());
    }
}
