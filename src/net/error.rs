//! Error taxonomy for the HTTP gateway.
//!
//! ERROR HANDLING
//! ==============
//! Failures are surfaced locally by the requesting view; nothing here is
//! retried automatically except the single refresh-and-replay performed by
//! the gateway itself.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Error returned by the gateway and every endpoint helper built on it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The session could not be recovered: the refresh exchange failed or
    /// was impossible. Both persisted tokens have already been cleared.
    #[error("session expired")]
    Unauthorized,
    /// The server answered with a non-success status. The raw body is kept
    /// so views can surface the backend's `detail` message.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    /// The request never produced a response (DNS, CORS, dropped socket).
    #[error("network error: {0}")]
    Network(String),
    /// The response arrived but its body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for inline display, preferring the backend's
    /// `detail` payload when one is present.
    pub fn user_message(&self) -> String {
        if let ApiError::Status { body, .. } = self
            && let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
            && let Some(detail) = value.get("detail").and_then(|d| d.as_str())
        {
            return detail.to_owned();
        }
        match self {
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
            _ => "An unexpected error occurred.".to_owned(),
        }
    }
}
