//! Check result model and the JSON wire schema it is decoded from.

use serde::{Deserialize, Deserializer};

use crate::error::CheckError;

/// Tag of a [`Correction`]. The service marks spans it inspected but found fine as `no_error`.
/// A missing or `null` tag is an empty `Other`, so the correction still applies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum ErrorType {
    NoError,
    Other(String),
}

impl Default for ErrorType {
    fn default() -> Self {
        ErrorType::Other(String::new())
    }
}

impl From<Option<String>> for ErrorType {
    fn from(tag: Option<String>) -> Self {
        tag.map(ErrorType::from).unwrap_or_default()
    }
}

impl From<String> for ErrorType {
    fn from(tag: String) -> Self {
        if tag == "no_error" {
            ErrorType::NoError
        } else {
            ErrorType::Other(tag)
        }
    }
}

impl ErrorType {
    pub fn is_error(&self) -> bool {
        !matches!(self, ErrorType::NoError)
    }
}

/// One flagged span in a sentence, its suggested replacement and explanatory notes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Correction {
    #[serde(default, deserialize_with = "null_as_default")]
    pub input: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub output: String,
    #[serde(rename = "etype", default)]
    pub error_type: ErrorType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub help: Vec<String>,
    /// Shorter help text intended for mobile clients.
    #[serde(rename = "help_mo", default, deserialize_with = "null_as_default")]
    pub help_mobile: Vec<String>,
    #[serde(rename = "example", default, deserialize_with = "null_as_default")]
    pub examples: Vec<String>,
}

/// One sentence as segmented by the service, with its corrections in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentenceResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentence: String,
    #[serde(rename = "result", default, deserialize_with = "null_as_default")]
    pub corrections: Vec<Correction>,
}

/// Successful check of one inbound text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResult {
    pub sentences: Vec<SentenceResult>,
}

/// Raw response body. Carries either `sentences` or `errorType` / `message`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentences: Vec<SentenceResult>,
    #[serde(rename = "errorType", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CheckResponse {
    /// Splits the union: a non-empty `errorType` becomes [`CheckError::Api`], anything else a [`CheckResult`].
    pub fn into_result(self) -> Result<CheckResult, CheckError> {
        match self.error_type {
            Some(kind) if !kind.is_empty() => Err(CheckError::Api {
                kind,
                detail: self.message.unwrap_or_default(),
            }),
            _ => Ok(CheckResult {
                sentences: self.sentences,
            }),
        }
    }
}
