//! Adapters from Telegram (teloxide) types to hanspell_core types.
//! Depends only on teloxide and hanspell_core type definitions.

use hanspell_core::{Chat, Message, Update, User};
use teloxide::types::UpdateKind;

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramMessageWrapper<'a> {
    pub fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0,
            user: self.0.from.as_ref().map(|u| TelegramUserWrapper(u).to_core()),
            chat: Chat {
                id: self.0.chat.id.0,
            },
            text: self.0.text().map(|s| s.to_string()),
        }
    }
}

/// Wraps a teloxide Update. Only new messages carry a payload; every other update kind
/// (edits, callbacks, member changes) converts to an update without a message.
pub struct TelegramUpdateWrapper<'a>(pub &'a teloxide::types::Update);

impl<'a> TelegramUpdateWrapper<'a> {
    pub fn to_core(&self) -> Update {
        let message = match &self.0.kind {
            UpdateKind::Message(msg) => Some(TelegramMessageWrapper(msg).to_core()),
            _ => None,
        };
        Update {
            id: self.0.id.0,
            message,
        }
    }
}
