//! HwPulse configuration system.
//!
//! Split in two on purpose: credentials come from the environment only and
//! have no defaults (missing one is fatal at startup), while tunable
//! settings live in an optional TOML file with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{HwPulseError, Result};

/// Environment variable holding the review-service OAuth token.
pub const ENV_API_TOKEN: &str = "HWPULSE_API_TOKEN";
/// Environment variable holding the Telegram bot token.
pub const ENV_TELEGRAM_TOKEN: &str = "HWPULSE_TELEGRAM_TOKEN";
/// Environment variable holding the destination chat id.
pub const ENV_TELEGRAM_CHAT_ID: &str = "HWPULSE_TELEGRAM_CHAT_ID";

/// Secrets required for the worker to run at all. No defaults.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_token: String,
    pub bot_token: String,
    pub chat_id: String,
}

impl Credentials {
    /// Read all required credentials from the environment.
    /// An unset or empty variable fails with the name of the offender.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_token: require_env(ENV_API_TOKEN)?,
            bot_token: require_env(ENV_TELEGRAM_TOKEN)?,
            chat_id: require_env(ENV_TELEGRAM_CHAT_ID)?,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            HwPulseError::Config(format!("missing required environment variable {name}"))
        })
}

/// Tunable settings. Every field has a default, so an absent or empty
/// config file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Fixed sleep between poll cycles, in seconds.
    #[serde(default = "default_retry_period")]
    pub retry_period_secs: u64,
    /// Per-request timeout for both the review API and Telegram.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".into()
}
fn default_retry_period() -> u64 {
    600
}
fn default_request_timeout() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            retry_period_secs: default_retry_period(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HwPulseError::Config(format!("failed to read settings: {e}")))?;
        let settings: Self = toml::from_str(&content)
            .map_err(|e| HwPulseError::Config(format!("failed to parse settings: {e}")))?;
        Ok(settings)
    }

    /// Load from a file when one is given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Ok(Self::default()),
        }
    }
}

/// Full runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub settings: Settings,
}

impl Config {
    pub fn new(credentials: Credentials, settings: Settings) -> Self {
        Self {
            credentials,
            settings,
        }
    }
}
