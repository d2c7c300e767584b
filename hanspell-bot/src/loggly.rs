//! Loggly HTTP sink: posts each [`LogEvent`] as JSON to `{base}/inputs/{token}/tag/{tag}/`.
//! Best-effort; failures are reported through tracing only.

use async_trait::async_trait;
use hanspell_core::{LogEvent, LogSink};
use reqwest::Client;
use tracing::warn;

pub const LOGGLY_API_BASE: &str = "https://logs-01.loggly.com";
const LOGGLY_TAG: &str = "hanspell-bot";

#[derive(Debug, Clone)]
pub struct LogglySink {
    client: Client,
    endpoint: String,
}

impl LogglySink {
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, LOGGLY_API_BASE)
    }

    /// Uses a different collector host (e.g. a mock server in tests).
    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!(
                "{}/inputs/{}/tag/{}/",
                base_url.trim_end_matches('/'),
                token,
                LOGGLY_TAG
            ),
        }
    }
}

#[async_trait]
impl LogSink for LogglySink {
    async fn record(&self, event: LogEvent) {
        let result = self
            .client
            .post(&self.endpoint)
            .json(&event)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        if let Err(e) = result {
            warn!(error = %e, "failed to forward log event to loggly");
        }
    }
}
