//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use oc_api::DEFAULT_API_URL;
use oc_core::{ParseDurationError, parse_duration};
use serde::{Deserialize, Serialize};

/// A duration given either as plain seconds or as duration text.
///
/// Allows `allowed = 90` as well as `allowed = "2 minutes"` in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationSetting {
    Seconds(u64),
    Text(String),
}

impl DurationSetting {
    pub fn to_seconds(&self) -> Result<u64, ParseDurationError> {
        match self {
            Self::Seconds(seconds) => Ok(*seconds),
            Self::Text(text) => parse_duration(text),
        }
    }
}

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Toggl API token.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Base URL of the Toggl service.
    pub api_url: String,

    /// Default tolerance when `--allowed` is not given.
    pub allowed: DurationSetting,

    /// Default lookback window when `--since` is not given.
    #[serde(default)]
    pub since: Option<DurationSetting>,

    /// Request timeout in seconds. Requests wait indefinitely when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("allowed", &self.allowed)
            .field("since", &self.since)
            .field("timeout_secs", &self.timeout_secs)
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            api_url: DEFAULT_API_URL.to_string(),
            allowed: DurationSetting::Seconds(60),
            since: None,
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (OC_*)
        figment = figment.merge(Env::prefixed("OC_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for overlap-check.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("overlap-check"))
}
