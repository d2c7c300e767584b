//! Wraps teloxide::Bot and implements [`hanspell_core::Bot`]. Production code talks to Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use hanspell_core::{Bot as CoreBot, BotError, Chat, ChatAction, Identity, ParseMode, Result};
use teloxide::payloads::SendMessageSetters;
use teloxide::{prelude::*, types::ChatId};
use tracing::debug;

/// Builds a teloxide Bot for `token`, optionally pointed at a different Bot API server
/// (a local Bot API server, or a mock server in tests).
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url) => {
            let url = reqwest::Url::parse(url)
                .map_err(|e| BotError::Config(format!("invalid Telegram API URL {}: {}", url, e)))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[allow(deprecated)]
fn to_teloxide_parse_mode(mode: ParseMode) -> teloxide::types::ParseMode {
    match mode {
        ParseMode::Markdown => teloxide::types::ParseMode::Markdown,
    }
}

fn to_teloxide_chat_action(action: ChatAction) -> teloxide::types::ChatAction {
    match action {
        ChatAction::Typing => teloxide::types::ChatAction::Typing,
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn get_me(&self) -> Result<Identity> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(Identity {
            id: me.user.id.0 as i64,
            username: me.user.username.clone(),
            first_name: me.user.first_name.clone(),
        })
    }

    async fn delete_webhook(&self) -> Result<()> {
        self.bot
            .delete_webhook()
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_chat_action(&self, chat: &Chat, action: ChatAction) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), to_teloxide_chat_action(action))
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_message(&self, chat: &Chat, text: &str, parse_mode: Option<ParseMode>) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), text.to_string());
        if let Some(mode) = parse_mode {
            request = request.parse_mode(to_teloxide_parse_mode(mode));
        }
        let sent = request
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        debug!(chat_id = chat.id, message_id = sent.id.0, "message sent");
        Ok(())
    }
}
