//! Check command: fetch entries, validate them and print the report.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use oc_api::Client;
use oc_core::{API_ENTRY_LIMIT, Report, TimeEntry, parse_duration, sort_by_start, validate};

use crate::{Cli, Config};

/// Settings for one check run, resolved from flags and configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub api_token: String,
    pub api_url: String,
    pub timeout: Option<Duration>,
    /// Lookback window in seconds; `None` uses the service default.
    pub since: Option<u64>,
    /// Allowed window in seconds.
    pub allowed: u64,
    pub json: bool,
}

impl std::fmt::Debug for CheckOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckOptions")
            .field("api_token", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("since", &self.since)
            .field("allowed", &self.allowed)
            .field("json", &self.json)
            .finish()
    }
}

impl CheckOptions {
    /// Merges command-line flags over configuration. Flags win.
    ///
    /// Fails before anything touches the network when the token is missing
    /// or a duration cannot be parsed.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let api_token = cli
            .token
            .as_deref()
            .or(config.api_token.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("missing API token (pass --token, set OC_API_TOKEN or config.toml)")
            })?
            .to_string();

        let since = match (&cli.since, &config.since) {
            (Some(text), _) => Some(
                parse_duration(text).with_context(|| format!("invalid --since value '{text}'"))?,
            ),
            (None, Some(setting)) => Some(
                setting
                    .to_seconds()
                    .context("invalid `since` in configuration")?,
            ),
            (None, None) => None,
        };

        let allowed = match &cli.allowed {
            Some(text) => {
                parse_duration(text).with_context(|| format!("invalid --allowed value '{text}'"))?
            }
            None => config
                .allowed
                .to_seconds()
                .context("invalid `allowed` in configuration")?,
        };

        Ok(Self {
            api_token,
            api_url: config.api_url.clone(),
            timeout: config.timeout_secs.map(Duration::from_secs),
            since,
            allowed,
            json: cli.json,
        })
    }
}

pub fn run<W: Write>(writer: &mut W, options: &CheckOptions) -> Result<()> {
    let client = Client::new(options.api_token.as_str(), options.timeout)
        .context("failed to create API client")?
        .with_base_url(options.api_url.as_str());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to initialize tokio runtime")?;
    let entries = runtime
        .block_on(client.fetch_entries(options.since))
        .context("failed to fetch time entries")?;

    let report = check_entries(entries, options.allowed)?;
    render(writer, &report, options.json)
}

/// Sorts entries by start and validates them.
pub fn check_entries(mut entries: Vec<TimeEntry>, allowed: u64) -> Result<Report> {
    sort_by_start(&mut entries);
    let report = validate(&entries, allowed).context("failed to validate time entries")?;
    tracing::debug!(
        checked = report.checked,
        overlaps = report.overlaps.len(),
        clean = report.is_clean(),
        "validation finished"
    );
    if report.limit_reached {
        tracing::warn!(limit = API_ENTRY_LIMIT, "entry count reached the API limit");
    }
    Ok(report)
}

pub fn render<W: Write>(writer: &mut W, report: &Report, json: bool) -> Result<()> {
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(report)?)?;
        return Ok(());
    }

    for overlap in &report.overlaps {
        writeln!(
            writer,
            "Start time ({}) is before stop time ({}).",
            overlap.start, overlap.stop
        )?;
    }
    writeln!(writer, "{} entries checked.", report.checked)?;
    if report.limit_reached {
        writeln!(
            writer,
            "Warning: {} entries returned, the API limit of {API_ENTRY_LIMIT} may have truncated the results.",
            report.checked
        )?;
    }

    Ok(())
}
