//! Toggl API client for the overlap checker.
//!
//! Fetches the authenticated user's time entries from the v8
//! `time_entries` endpoint. One request per call, no pagination and no retry.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use oc_core::TimeEntry;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

/// Default service host.
pub const DEFAULT_API_URL: &str = "https://api.track.toggl.com";
const TIME_ENTRIES_PATH: &str = "/api/v8/time_entries";
/// Password half of the Basic credential when authenticating with an API token.
const API_TOKEN_PASSWORD: &str = "api_token";

/// API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The provided API token was invalid.
    #[error("invalid API token: {reason}")]
    InvalidToken { reason: &'static str },
    /// The lookback window reaches before the representable range of dates.
    #[error("lookback of {seconds} seconds is out of range")]
    InvalidSince { seconds: u64 },
    /// Failed to build HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// HTTP request failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The service answered with something other than 200 OK.
    #[error("API returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    /// Failed to parse response.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Time entry API client.
pub struct Client {
    http: reqwest::Client,
    api_token: String,
    base_url: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client with the given API token.
    ///
    /// Requests have no timeout unless one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or whitespace-only, or if
    /// the HTTP client fails to build.
    pub fn new(api_token: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let api_token = api_token.into();

        if api_token.is_empty() {
            return Err(ApiError::InvalidToken {
                reason: "API token cannot be empty",
            });
        }
        if api_token.trim().is_empty() {
            return Err(ApiError::InvalidToken {
                reason: "API token cannot be whitespace-only",
            });
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("overlap-check/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::ClientBuild)?;

        Ok(Self {
            http,
            api_token,
            base_url: DEFAULT_API_URL.to_string(),
        })
    }

    /// Points the client at a different service host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Fetches time entries, optionally only those started within the last `since` seconds.
    ///
    /// Entries are returned in service order, which is not guaranteed to be sorted.
    pub async fn fetch_entries(&self, since: Option<u64>) -> Result<Vec<TimeEntry>, ApiError> {
        let request = self.build_request(since, Utc::now())?;
        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        let entries = decode_response(status, &body)?;
        tracing::debug!(
            count = entries.len(),
            running = entries.iter().filter(|entry| entry.is_running()).count(),
            "fetched time entries"
        );
        Ok(entries)
    }

    fn build_request(
        &self,
        since: Option<u64>,
        now: DateTime<Utc>,
    ) -> Result<reqwest::Request, ApiError> {
        let url = format!("{}{TIME_ENTRIES_PATH}", self.base_url);
        let mut request = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .basic_auth(&self.api_token, Some(API_TOKEN_PASSWORD));

        if let Some(seconds) = since {
            let start_date = start_date(now, seconds)?;
            tracing::debug!(%start_date, "requesting entries since");
            request = request.query(&[("start_date", start_date)]);
        }

        Ok(request.build()?)
    }
}

/// Formats `now - seconds` as a UTC timestamp with a `Z` suffix.
fn start_date(now: DateTime<Utc>, seconds: u64) -> Result<String, ApiError> {
    i64::try_from(seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|delta| now.checked_sub_signed(delta))
        .map(|start| start.to_rfc3339_opts(SecondsFormat::Secs, true))
        .ok_or(ApiError::InvalidSince { seconds })
}

fn decode_response(status: StatusCode, body: &str) -> Result<Vec<TimeEntry>, ApiError> {
    if status != StatusCode::OK {
        return Err(ApiError::Status {
            status,
            message: body.lines().next().unwrap_or_default().to_string(),
        });
    }

    serde_json::from_str(body).map_err(|err| ApiError::InvalidResponse(err.to_string()))
}
