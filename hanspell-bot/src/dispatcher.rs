//! # Update dispatcher
//!
//! Handles inbound updates one at a time: typing indicator, reply text (welcome, checked text or
//! API error), Markdown send. Per-update failures are logged and never stop the loop; only the
//! startup checks in [`UpdateDispatcher::prepare`] are fatal.

use std::sync::Arc;

use grammar_client::{format_result, CheckError, GrammarChecker};
use hanspell_core::{
    Bot, BotError, ChatAction, Identity, LogEvent, LogLevel, LogSink, Message, ParseMode, Result,
    Update, UpdateSource,
};
use tokio::sync::Mutex;
use tracing::{error, info, instrument, warn};

/// Command Telegram clients send when a user opens the bot.
pub const COMMAND_START: &str = "/start";

/// Reply for `/start` and for messages without text.
pub const WELCOME_MESSAGE: &str = "맞춤법을 검사할 문장을 입력해 주세요.";

/// User-visible reply when the grammar check fails.
pub fn api_error_message(err: &CheckError) -> String {
    format!("API 호출 오류: {}", err)
}

/// Sequential update handler. Holds the transport, the grammar checker and the external log sink.
pub struct UpdateDispatcher {
    bot: Arc<dyn Bot>,
    checker: Arc<dyn GrammarChecker>,
    sink: Arc<dyn LogSink>,
    /// Held for the whole of one update so updates never interleave, even if the dispatcher is shared.
    processing: Mutex<()>,
}

impl UpdateDispatcher {
    pub fn new(bot: Arc<dyn Bot>, checker: Arc<dyn GrammarChecker>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            bot,
            checker,
            sink,
            processing: Mutex::new(()),
        }
    }

    /// Startup checks: the bot identity must be retrievable and any webhook must be removed,
    /// since polling and webhook delivery are mutually exclusive.
    pub async fn prepare(&self) -> Result<Identity> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::Setup(format!("failed to get info of the bot: {}", e)))?;
        info!(
            "Bot information: @{} ({})",
            me.username.as_deref().unwrap_or_default(),
            me.first_name
        );

        self.bot
            .delete_webhook()
            .await
            .map_err(|e| BotError::Setup(format!("failed to delete webhook: {}", e)))?;
        info!("Webhook deleted, polling for updates");

        Ok(me)
    }

    /// Consumes the source until it closes. Receive errors are logged and polling continues.
    pub async fn run<S>(&self, source: &mut S)
    where
        S: UpdateSource + ?Sized,
    {
        loop {
            match source.poll().await {
                Ok(Some(updates)) => {
                    for update in &updates {
                        self.handle_update(update).await;
                    }
                }
                Ok(None) => {
                    info!("Update source closed, dispatcher stopped");
                    return;
                }
                Err(e) => {
                    error!(error = %e, "*** error while receiving update");
                    self.sink
                        .record(LogEvent::new(
                            LogLevel::Error,
                            format!("error while receiving update: {}", e),
                        ))
                        .await;
                }
            }
        }
    }

    /// Processes one update. Returns the reply text that was sent (or attempted), or `None` when
    /// the update carries no message.
    #[instrument(skip(self, update), fields(update_id = update.id))]
    pub async fn handle_update(&self, update: &Update) -> Option<String> {
        let _guard = self.processing.lock().await;

        let message = update.message.as_ref()?;
        let chat = message.chat;

        info!(
            chat_id = chat.id,
            from = %message.user.as_ref().map(|u| u.display_name()).unwrap_or_default(),
            has_text = message.text.is_some(),
            "Received message"
        );

        if let Err(e) = self.bot.send_chat_action(&chat, ChatAction::Typing).await {
            warn!(chat_id = chat.id, error = %e, "failed to send typing action");
        }

        let reply = self.reply_for(message).await;

        if let Err(e) = self
            .bot
            .send_message(&chat, &reply, Some(ParseMode::Markdown))
            .await
        {
            error!(chat_id = chat.id, error = %e, "*** failed to send message");
            self.sink
                .record(
                    LogEvent::new(LogLevel::Error, format!("failed to send message: {}", e))
                        .with_chat_id(chat.id),
                )
                .await;
        }

        Some(reply)
    }

    /// Decides the reply text for a message. Only calls the grammar checker for ordinary text.
    pub async fn reply_for(&self, message: &Message) -> String {
        let text = match message.text.as_deref() {
            None => return WELCOME_MESSAGE.to_string(),
            Some(COMMAND_START) => return WELCOME_MESSAGE.to_string(),
            Some(text) => text,
        };

        match self.checker.check(text).await {
            Ok(result) => {
                self.sink
                    .record(
                        LogEvent::new(
                            LogLevel::Info,
                            format!("checked {} sentence(s)", result.sentences.len()),
                        )
                        .with_chat_id(message.chat.id),
                    )
                    .await;
                format_result(&result)
            }
            Err(e) => {
                error!(chat_id = message.chat.id, error = %e, "*** failed to call api");
                self.sink
                    .record(
                        LogEvent::new(LogLevel::Error, format!("failed to call api: {}", e))
                            .with_chat_id(message.chat.id),
                    )
                    .await;
                api_error_message(&e)
            }
        }
    }
}
