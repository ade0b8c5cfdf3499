//! Client configuration.
//!
//! Values come from, in increasing priority: built-in defaults, a `.env`
//! file in the working directory, process environment variables, and
//! command-line flags.
//!
//! | variable | default |
//! |----------|---------|
//! | `MEDIASHELF_API_BASE` | [`DEFAULT_API_BASE`] |
//! | `MEDIASHELF_TIMEOUT_SECS` | [`DEFAULT_TIMEOUT_SECS`] |
//! | `MEDIASHELF_LOG` | `info` |

use reqwest::Url;
use std::env;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};
use crate::logs::LogLevel;

/// Records API used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_API_BASE: &str = "MEDIASHELF_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "MEDIASHELF_TIMEOUT_SECS";
pub const ENV_LOG: &str = "MEDIASHELF_LOG";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the records API; `/api/records` is appended to it.
    pub api_base: Url,
    pub timeout: Duration,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(base) = get(ENV_API_BASE) {
            config = config.with_api_base(&base)?;
        }

        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            let parsed = secs
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(secs.clone()))?;
            config.timeout = Duration::from_secs(parsed);
        }

        if let Some(level) = get(ENV_LOG) {
            config.log_level = level.parse()?;
        }

        Ok(config)
    }

    /// Override the API base (e.g. from `--api-base`).
    pub fn with_api_base(mut self, base: &str) -> ConfigResult<Self> {
        let invalid = |message: String| ConfigError::InvalidApiBase {
            url: base.to_string(),
            message,
        };

        let url = Url::parse(base.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        self.api_base = url;
        Ok(self)
    }

    /// Turn on debug output (`--verbose`).
    pub fn verbose(mut self) -> Self {
        self.log_level = LogLevel::Debug;
        self
    }
}
