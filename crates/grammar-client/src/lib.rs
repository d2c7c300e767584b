//! # Grammar client
//!
//! Client for the Daum Korean grammar checker plus the pure formatter that turns a check
//! result into an annotated Telegram message.
//!
//! ## Example
//!
//! ```rust,no_run
//! use grammar_client::{format_result, DaumGrammarClient, GrammarChecker};
//!
//! async fn example() -> Result<(), grammar_client::CheckError> {
//!     let client = DaumGrammarClient::new("your-api-key".to_string());
//!     let result = client.check("내가 뭐라꼬 그랫는지").await?;
//!     println!("{}", format_result(&result));
//!     Ok(())
//! }
//! ```
//!
//! The wire response can carry either sentences or an application-level error
//! (`errorType` / `message`); [`GrammarChecker::check`] returns the two as
//! `Ok(CheckResult)` and `Err(CheckError::Api { .. })` so they never coexist.

mod client;
mod error;
mod format;
mod types;

pub use client::{DaumGrammarClient, GrammarChecker, DAUM_GRAMMAR_API_URL};
pub use error::CheckError;
pub use format::{apply_corrections, format_result};
pub use types::{CheckResponse, CheckResult, Correction, ErrorType, SentenceResult};

#[cfg(test)]
mod format_test;
