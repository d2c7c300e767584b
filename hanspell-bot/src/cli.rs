//! CLI parser and config loading.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{BotConfig, ValidConfig};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Parser)]
#[command(name = "hanspell-bot")]
#[command(about = "Telegram bot that checks Korean spelling", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from JSON file if present, else env; token can override either).
    Run {
        /// Path to the JSON config file. Defaults to ./config.json when it exists.
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Loads and validates config. An explicit `config` path must exist; otherwise `config.json`
/// is used when present and the environment when not.
pub fn load_config(config: Option<PathBuf>, token: Option<String>) -> Result<ValidConfig> {
    let raw = match config {
        Some(path) => BotConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => BotConfig::from_file(DEFAULT_CONFIG_FILE)?,
        None => BotConfig::from_env()?,
    };
    Ok(raw.with_token_override(token).validate()?)
}
