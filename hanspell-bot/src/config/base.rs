//! Raw config record as read from `config.json` or the environment. Nothing is defaulted or
//! checked here; call [`BotConfig::validate`] before use.

use std::env;
use std::path::Path;

use hanspell_core::{BotError, Result};
use serde::Deserialize;

/// Config record. Field names follow the JSON file:
///
/// ```json
/// {
///   "telegram_api_token": "123456:ABC...",
///   "daum_api_key": "0123abcd...",
///   "monitor_interval": 1,
///   "is_verbose": false,
///   "loggly_token": "optional"
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BotConfig {
    /// BOT_TOKEN
    #[serde(default)]
    pub telegram_api_token: String,
    /// DAUM_API_KEY
    #[serde(default)]
    pub daum_api_key: String,
    /// MONITOR_INTERVAL, seconds between polls; values <= 0 mean 1
    #[serde(default)]
    pub monitor_interval: i64,
    /// IS_VERBOSE
    #[serde(default)]
    pub is_verbose: bool,
    /// LOGGLY_TOKEN; external log sink is disabled when unset
    #[serde(default)]
    pub loggly_token: Option<String>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    #[serde(default)]
    pub telegram_api_url: Option<String>,
    /// GRAMMAR_API_URL
    #[serde(default)]
    pub grammar_api_url: Option<String>,
    /// GRAMMAR_TIMEOUT_SECS; unset or 0 means no timeout
    #[serde(default)]
    pub grammar_timeout_secs: Option<u64>,
    /// LOG_FILE
    #[serde(default)]
    pub log_file: Option<String>,
}

impl BotConfig {
    /// Reads the JSON config file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            BotError::Config(format!("failed to read config file {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            BotError::Config(format!("failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Loads from environment variables. Unset variables stay empty; malformed numbers are an error.
    pub fn from_env() -> Result<Self> {
        let telegram_api_token = env::var("BOT_TOKEN").unwrap_or_default();
        let daum_api_key = env::var("DAUM_API_KEY").unwrap_or_default();
        let monitor_interval = parse_env::<i64>("MONITOR_INTERVAL")?.unwrap_or(0);
        let is_verbose = env::var("IS_VERBOSE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(false);
        let loggly_token = env::var("LOGGLY_TOKEN").ok();
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let grammar_api_url = env::var("GRAMMAR_API_URL").ok();
        let grammar_timeout_secs = parse_env::<u64>("GRAMMAR_TIMEOUT_SECS")?;
        let log_file = env::var("LOG_FILE").ok();

        Ok(Self {
            telegram_api_token,
            daum_api_key,
            monitor_interval,
            is_verbose,
            loggly_token,
            telegram_api_url,
            grammar_api_url,
            grammar_timeout_secs,
            log_file,
        })
    }

    /// Replaces the Telegram token when `token` is provided (CLI `--token`).
    pub fn with_token_override(mut self, token: Option<String>) -> Self {
        if let Some(token) = token {
            self.telegram_api_token = token;
        }
        self
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| BotError::Config(format!("{} is not a valid number ({}): {}", name, raw, e))),
        _ => Ok(None),
    }
}
