//! Daum grammar-checker HTTP client.
//!
//! One GET per inbound text with `apikey`, `query` and `help=on`. No retries; the caller
//! decides what to do with a failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::error::CheckError;
use crate::types::{CheckResponse, CheckResult};

/// Default endpoint of the Daum Korean grammar checker.
pub const DAUM_GRAMMAR_API_URL: &str = "https://apis.daum.net/grammar-checker/v1/check.json";

/// Checks the grammar of a piece of text. Implemented by [`DaumGrammarClient`]; tests substitute stubs.
#[async_trait]
pub trait GrammarChecker: Send + Sync {
    async fn check(&self, text: &str) -> Result<CheckResult, CheckError>;
}

/// reqwest-based client for the Daum grammar checker.
#[derive(Debug, Clone)]
pub struct DaumGrammarClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl DaumGrammarClient {
    /// Creates a client for the default endpoint without a request timeout.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url: DAUM_GRAMMAR_API_URL.to_string(),
        }
    }

    /// Creates a client with an optional per-request timeout. `None` keeps reqwest's default (no timeout).
    pub fn with_timeout(api_key: String, timeout: Option<Duration>) -> Result<Self, CheckError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            api_key,
            api_url: DAUM_GRAMMAR_API_URL.to_string(),
        })
    }

    /// Points the client at a different endpoint (e.g. a mock server in tests).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl GrammarChecker for DaumGrammarClient {
    async fn check(&self, text: &str) -> Result<CheckResult, CheckError> {
        info!(text_len = text.chars().count(), "step: grammar check request");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("apikey", self.api_key.as_str()), ("query", text), ("help", "on")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, body_len = body.len(), "grammar check response received");

        let parsed = serde_json::from_str::<CheckResponse>(&body);
        let result = match parsed {
            Ok(parsed) if parsed.error_type.as_deref().is_some_and(|k| !k.is_empty()) => {
                parsed.into_result()
            }
            Ok(parsed) if status.is_success() => parsed.into_result(),
            Ok(_) => Err(CheckError::Status {
                status: status.as_u16(),
                body,
            }),
            Err(_) if !status.is_success() => Err(CheckError::Status {
                status: status.as_u16(),
                body,
            }),
            Err(e) => Err(CheckError::Decode(e)),
        };

        match &result {
            Ok(checked) => info!(
                sentences = checked.sentences.len(),
                "step: grammar check done"
            ),
            Err(e) => warn!(error = %e, "grammar check failed"),
        }
        result
    }
}
