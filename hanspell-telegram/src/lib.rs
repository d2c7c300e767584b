//! # hanspell-telegram
//!
//! Telegram transport layer: adapters from teloxide types, [`hanspell_core::Bot`] implementation,
//! and a `getUpdates` polling [`hanspell_core::UpdateSource`].
//! Handles only Telegram connectivity; no grammar checking or formatting.

mod adapters;
mod bot_adapter;
mod poller;

pub use adapters::{TelegramMessageWrapper, TelegramUpdateWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter};
pub use poller::TelegramUpdateSource;
