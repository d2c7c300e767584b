//! Bot configuration: raw [`BotConfig`] (JSON file or env) and the normalized [`ValidConfig`].

mod base;
mod bot_config;


pub use base::BotConfig;
pub use bot_config::{ValidConfig, DEFAULT_LOG_FILE};
