//! External log sink port.
//!
//! The dispatcher receives an `Arc<dyn LogSink>` at construction. When no external sink is
//! configured it gets [`NoopLogSink`], so call sites never check for a missing sink.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Severity of a forwarded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Error,
}

/// One event forwarded to the external sink; serialized as JSON by HTTP sinks.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub level: LogLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
    pub timestamp: DateTime<Utc>,
}

impl LogEvent {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            chat_id: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_chat_id(mut self, chat_id: i64) -> Self {
        self.chat_id = Some(chat_id);
        self
    }
}

/// Destination for events that should leave the process (e.g. a hosted log service).
/// Implementations are best-effort and must not fail the caller.
#[async_trait]
pub trait LogSink: Send + Sync {
    async fn record(&self, event: LogEvent);
}

/// Sink used when no external logging is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogSink;

#[async_trait]
impl LogSink for NoopLogSink {
    async fn record(&self, _event: LogEvent) {}
}
