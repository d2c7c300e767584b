//! Transport abstractions: outbound [`Bot`] and inbound [`UpdateSource`].
//!
//! Both traits are transport-agnostic; hanspell-telegram implements them via teloxide and
//! tests substitute recording mocks.

use crate::error::Result;
use crate::types::{Chat, Identity, Update};
use async_trait::async_trait;

/// Chat action shown to the user while a reply is being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
}

/// Markup mode for outbound text. Legacy Markdown: `_italic_`, `*bold*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Markdown,
}

/// Outbound capabilities the dispatcher needs from the chat transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Returns the bot account's identity. Used once at startup to verify the token.
    async fn get_me(&self) -> Result<Identity>;
    /// Removes any registered webhook so that polling receives updates.
    async fn delete_webhook(&self) -> Result<()>;
    /// Shows a chat action (e.g. "typing...") in the given chat.
    async fn send_chat_action(&self, chat: &Chat, action: ChatAction) -> Result<()>;
    /// Sends a text message, optionally rendered with the given markup mode.
    async fn send_message(&self, chat: &Chat, text: &str, parse_mode: Option<ParseMode>) -> Result<()>;
}

/// Inbound stream of updates.
#[async_trait]
pub trait UpdateSource: Send {
    /// Waits for and returns the next batch of updates, in arrival order.
    /// `Ok(None)` means the source is closed and no more updates will arrive.
    async fn poll(&mut self) -> Result<Option<Vec<Update>>>;
}
