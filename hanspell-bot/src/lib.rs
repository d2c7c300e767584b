//! # Spelling-check Telegram bot
//!
//! Wires the Telegram transport (hanspell-telegram), the Daum grammar client and formatter
//! (grammar-client) and the update dispatcher. Loads config from a JSON file or env and runs the
//! polling loop.

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod loggly;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::{BotConfig, ValidConfig};
pub use dispatcher::{api_error_message, UpdateDispatcher, COMMAND_START, WELCOME_MESSAGE};
pub use loggly::LogglySink;
pub use runner::{build_log_sink, run_bot};
