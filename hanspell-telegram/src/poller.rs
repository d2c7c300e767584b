//! Long-poll update source: calls `getUpdates` once per interval and tracks the offset so
//! each update is delivered exactly once.

use std::time::Duration;

use async_trait::async_trait;
use hanspell_core::{BotError, Result, Update, UpdateSource};
use teloxide::payloads::GetUpdatesSetters;
use teloxide::prelude::*;
use teloxide::types::AllowedUpdate;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::debug;

use super::adapters::TelegramUpdateWrapper;

/// Polls the Telegram Bot API for new messages. The first poll is immediate; later polls wait
/// for the configured interval. Requires a webhook-free bot (see `Bot::delete_webhook`).
pub struct TelegramUpdateSource {
    bot: teloxide::Bot,
    interval: Duration,
    ticker: Option<Interval>,
    offset: i32,
}

impl TelegramUpdateSource {
    pub fn new(bot: teloxide::Bot, interval: Duration) -> Self {
        Self {
            bot,
            interval,
            ticker: None,
            offset: 0,
        }
    }

    /// Offset sent with the next `getUpdates` call (last seen update id + 1).
    pub fn offset(&self) -> i32 {
        self.offset
    }
}

#[async_trait]
impl UpdateSource for TelegramUpdateSource {
    async fn poll(&mut self) -> Result<Option<Vec<Update>>> {
        let interval = self.interval;
        let ticker = self.ticker.get_or_insert_with(|| {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker
        });
        ticker.tick().await;

        let updates = self
            .bot
            .get_updates()
            .offset(self.offset)
            .allowed_updates(vec![AllowedUpdate::Message])
            .await
            .map_err(|e| BotError::UpdateReceive(e.to_string()))?;

        debug!(count = updates.len(), offset = self.offset, "got telegram updates");

        let mut batch = Vec::with_capacity(updates.len());
        for update in &updates {
            self.offset = update.id.as_offset();
            batch.push(TelegramUpdateWrapper(update).to_core());
        }
        Ok(Some(batch))
    }
}
