use std::sync::Arc;

use anyhow::Result;
use grammar_client::DaumGrammarClient;
use hanspell_core::{init_tracing, LogSink, NoopLogSink};
use hanspell_telegram::{build_teloxide_bot, TelegramBotAdapter, TelegramUpdateSource};
use tracing::{info, instrument};

use crate::config::ValidConfig;
use crate::dispatcher::UpdateDispatcher;
use crate::loggly::LogglySink;

/// External log sink for the config: Loggly when a token is set, otherwise a no-op.
pub fn build_log_sink(config: &ValidConfig) -> Arc<dyn LogSink> {
    match &config.loggly_token {
        Some(token) => Arc::new(LogglySink::new(token)),
        None => Arc::new(NoopLogSink),
    }
}

/// Main entry: init logging, build transport, grammar client and sink, run startup checks, then poll forever.
/// Returns an error only for startup failures (logging init, bad URLs, getMe, deleteWebhook).
#[instrument(skip(config))]
pub async fn run_bot(config: ValidConfig) -> Result<()> {
    init_tracing(&config.log_file, config.verbose)?;

    info!(
        log_file = %config.log_file,
        poll_interval_secs = config.poll_interval.as_secs(),
        grammar_api_url = %config.grammar_api_url,
        external_logging = config.loggly_token.is_some(),
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(
        &config.telegram_api_token,
        config.telegram_api_url.as_deref(),
    )?;
    let bot = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let checker = Arc::new(
        DaumGrammarClient::with_timeout(config.daum_api_key.clone(), config.grammar_timeout)?
            .with_api_url(config.grammar_api_url.clone()),
    );
    let sink = build_log_sink(&config);

    let dispatcher = UpdateDispatcher::new(bot, checker, sink);
    dispatcher.prepare().await?;

    info!("Bot started successfully");

    let mut source = TelegramUpdateSource::new(teloxide_bot, config.poll_interval);
    dispatcher.run(&mut source).await;

    Ok(())
}
