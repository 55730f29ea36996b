//! Gateway error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur during a gateway call.
///
/// Timeouts are kept distinct from other transport failures even though
/// callers currently handle both the same way; retry logic would want to
/// tell them apart.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("unexpected response envelope: {0}")]
    Envelope(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(e)
        }
    }
}
