//! # hanspell-core
//!
//! Core types and traits for the spelling-check bot: [`Bot`], [`UpdateSource`], [`LogSink`],
//! update / message / user types, the error enum, and tracing initialization.
//! Transport-agnostic; used by hanspell-telegram and hanspell-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod sink;
pub mod types;

pub use bot::{Bot, ChatAction, ParseMode, UpdateSource};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use sink::{LogEvent, LogLevel, LogSink, NoopLogSink};
pub use types::{Chat, Identity, Message, Update, User};
