//! Test doubles for dispatcher tests: a recording [`Bot`], a scripted [`GrammarChecker`],
//! a recording [`LogSink`] and a scripted [`UpdateSource`].

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use grammar_client::{CheckError, CheckResult, GrammarChecker};
use hanspell_core::{
    Bot, BotError, Chat, ChatAction, Identity, LogEvent, LogSink, Message, ParseMode, Result,
    Update, UpdateSource, User,
};
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once per test process. `RUST_LOG` controls the level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("debug,hanspell_bot=debug"));

        let _ = fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

/// One outbound call recorded by [`MockBot`], in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCall {
    GetMe,
    DeleteWebhook,
    ChatAction { chat_id: i64, action: ChatAction },
    SendMessage { chat_id: i64, text: String, parse_mode: Option<ParseMode> },
}

/// Mock Bot that records every call. Individual operations can be made to fail.
#[derive(Default)]
pub struct MockBot {
    pub calls: Mutex<Vec<BotCall>>,
    pub fail_get_me: bool,
    pub fail_delete_webhook: bool,
    pub fail_chat_action: bool,
    pub fail_send: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts of all `send_message` calls.
    pub fn sent_texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BotCall::SendMessage { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: BotCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn get_me(&self) -> Result<Identity> {
        self.record(BotCall::GetMe);
        if self.fail_get_me {
            return Err(BotError::Transport("Unauthorized".into()));
        }
        Ok(Identity {
            id: 123456789,
            username: Some("hanspell_bot".to_string()),
            first_name: "맞춤법봇".to_string(),
        })
    }

    async fn delete_webhook(&self) -> Result<()> {
        self.record(BotCall::DeleteWebhook);
        if self.fail_delete_webhook {
            return Err(BotError::Transport("webhook still set".into()));
        }
        Ok(())
    }

    async fn send_chat_action(&self, chat: &Chat, action: ChatAction) -> Result<()> {
        self.record(BotCall::ChatAction {
            chat_id: chat.id,
            action,
        });
        if self.fail_chat_action {
            return Err(BotError::Transport("chat action rejected".into()));
        }
        Ok(())
    }

    async fn send_message(&self, chat: &Chat, text: &str, parse_mode: Option<ParseMode>) -> Result<()> {
        self.record(BotCall::SendMessage {
            chat_id: chat.id,
            text: text.to_string(),
            parse_mode,
        });
        if self.fail_send {
            return Err(BotError::Transport("Bad Request: can't parse entities".into()));
        }
        Ok(())
    }
}

type CheckReply = std::result::Result<CheckResult, CheckError>;

/// Grammar checker that records the texts it was asked to check and answers with a fixed reply.
pub struct StubChecker {
    texts: Mutex<Vec<String>>,
    reply: Box<dyn Fn() -> CheckReply + Send + Sync>,
}

impl StubChecker {
    pub fn returning(reply: impl Fn() -> CheckReply + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            texts: Mutex::new(Vec::new()),
            reply: Box::new(reply),
        })
    }

    pub fn checked_texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GrammarChecker for StubChecker {
    async fn check(&self, text: &str) -> CheckReply {
        self.texts.lock().unwrap().push(text.to_string());
        (self.reply)()
    }
}

/// Sink that keeps every recorded event.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<LogEvent>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogSink for RecordingSink {
    async fn record(&self, event: LogEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Update source that yields scripted poll results, then reports itself closed.
pub struct ScriptedSource {
    polls: VecDeque<Result<Vec<Update>>>,
}

impl ScriptedSource {
    pub fn new(polls: Vec<Result<Vec<Update>>>) -> Self {
        Self {
            polls: polls.into(),
        }
    }
}

#[async_trait]
impl UpdateSource for ScriptedSource {
    async fn poll(&mut self) -> Result<Option<Vec<Update>>> {
        match self.polls.pop_front() {
            Some(Ok(updates)) => Ok(Some(updates)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}

pub fn text_update(id: u32, chat_id: i64, text: &str) -> Update {
    Update {
        id,
        message: Some(Message {
            id: id as i32,
            user: Some(User {
                id: chat_id,
                username: Some("minji".to_string()),
                first_name: Some("Minji".to_string()),
                last_name: None,
            }),
            chat: Chat { id: chat_id },
            text: Some(text.to_string()),
        }),
    }
}

pub fn non_text_update(id: u32, chat_id: i64) -> Update {
    Update {
        id,
        message: Some(Message {
            id: id as i32,
            user: None,
            chat: Chat { id: chat_id },
            text: None,
        }),
    }
}

pub fn empty_update(id: u32) -> Update {
    Update { id, message: None }
}
