use thiserror::Error;

/// Failure of a single grammar check.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The service answered with an application-level error payload.
    #[error("{kind} - {detail}")]
    Api { kind: String, detail: String },

    /// Connection failure or body read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status without an application error payload.
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Body is not a valid check response.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CheckError {
    /// True for network / HTTP / decoding failures, false for service-reported errors.
    pub fn is_transport(&self) -> bool {
        !matches!(self, CheckError::Api { .. })
    }
}
