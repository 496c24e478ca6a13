use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use oc_cli::commands::check::{self, CheckOptions};
use oc_cli::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout carries only the report
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let options = CheckOptions::resolve(&cli, &config)?;
    tracing::debug!(?options, "resolved check options");

    let mut stdout = std::io::stdout().lock();
    check::run(&mut stdout, &options)
}
