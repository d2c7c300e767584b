//! ValidConfig: the normalized result of [`BotConfig::validate`]. Built once at startup, never reloaded.

use std::time::Duration;

use grammar_client::DAUM_GRAMMAR_API_URL;
use hanspell_core::{BotError, Result};

use super::BotConfig;

pub const DEFAULT_LOG_FILE: &str = "logs/hanspell-bot.log";

/// Config with defaults applied and every field checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidConfig {
    pub telegram_api_token: String,
    pub daum_api_key: String,
    pub poll_interval: Duration,
    pub verbose: bool,
    pub loggly_token: Option<String>,
    pub telegram_api_url: Option<String>,
    pub grammar_api_url: String,
    pub grammar_timeout: Option<Duration>,
    pub log_file: String,
}

impl BotConfig {
    /// Checks required fields and URLs and applies defaults. Pure; no I/O.
    pub fn validate(&self) -> Result<ValidConfig> {
        let telegram_api_token = required(&self.telegram_api_token, "telegram_api_token (BOT_TOKEN)")?;
        let daum_api_key = required(&self.daum_api_key, "daum_api_key (DAUM_API_KEY)")?;

        let telegram_api_url = non_empty(self.telegram_api_url.as_deref());
        if let Some(url) = &telegram_api_url {
            check_url(url, "telegram_api_url (TELEGRAM_API_URL or TELOXIDE_API_URL)")?;
        }
        let grammar_api_url = non_empty(self.grammar_api_url.as_deref())
            .unwrap_or_else(|| DAUM_GRAMMAR_API_URL.to_string());
        check_url(&grammar_api_url, "grammar_api_url (GRAMMAR_API_URL)")?;

        let poll_secs = if self.monitor_interval <= 0 {
            1
        } else {
            self.monitor_interval as u64
        };

        Ok(ValidConfig {
            telegram_api_token,
            daum_api_key,
            poll_interval: Duration::from_secs(poll_secs),
            verbose: self.is_verbose,
            loggly_token: non_empty(self.loggly_token.as_deref()),
            telegram_api_url,
            grammar_api_url,
            grammar_timeout: self
                .grammar_timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            log_file: non_empty(self.log_file.as_deref())
                .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        })
    }
}

fn required(value: &str, name: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BotError::Config(format!("{} is not set", name)));
    }
    Ok(value.to_string())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn check_url(url: &str, name: &str) -> Result<()> {
    reqwest::Url::parse(url)
        .map(|_| ())
        .map_err(|_| BotError::Config(format!("{} is set but not a valid URL: {}", name, url)))
}
