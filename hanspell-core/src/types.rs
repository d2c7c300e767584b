//! Core types: update, message, user, chat, and the bot's own identity.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Human-readable sender label for logs: `@username`, else the full name, else the id.
    pub fn display_name(&self) -> String {
        if let Some(username) = &self.username {
            return format!("@{}", username);
        }
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.id.to_string()
        } else {
            full
        }
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// A single inbound message. `text` is `None` for stickers, photos and other non-text payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    pub user: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
}

/// One inbound event from the chat transport, possibly carrying a user message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    pub id: u32,
    pub message: Option<Message>,
}

/// The bot account itself, as returned by the transport's identity call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: String,
}
