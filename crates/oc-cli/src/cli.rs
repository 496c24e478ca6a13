//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Checks Toggl time entries for overlaps.
///
/// Fetches the user's time entries and reports every entry that starts
/// before the previous one stopped.
#[derive(Debug, Parser)]
#[command(name = "overlap-check", version, about, long_about = None)]
pub struct Cli {
    /// Toggl API token (overrides `api_token` from config or `OC_API_TOKEN`).
    #[arg(short, long)]
    pub token: Option<String>,

    /// Only check entries started within this window (e.g. "7 days", "1week").
    #[arg(short, long, value_name = "DURATION")]
    pub since: Option<String>,

    /// Tolerance compared against each overlap (e.g. "90", "2 minutes"). Defaults to 60 seconds.
    #[arg(short, long, value_name = "DURATION")]
    pub allowed: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
