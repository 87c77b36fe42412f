//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every store action records a human-readable message for the UI and also
//! returns the typed error, so pages can use either channel.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Network or transport failure; no response was received.
    #[error("network error: {0}")]
    Transport(String),
    /// Backend answered with a non-2xx status.
    #[error("request failed with status code {status}")]
    Status { status: u16, body: Value },
    /// Login/register/refresh response carried no token.
    #[error("No token in response")]
    MissingToken,
    /// Response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status for backend-reported failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` when the backend rejected the credentials (HTTP 401).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Non-empty `message` field from a backend error body.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}

/// Pick the message shown to the user: backend message, then the error's own
/// description, then `fallback` when a transport or decode failure carries no
/// detail.
#[must_use]
pub fn failure_message(err: &ApiError, fallback: &str) -> String {
    if let Some(message) = err.backend_message() {
        return message.to_owned();
    }
    match err {
        ApiError::Transport(detail) | ApiError::Decode(detail) if detail.trim().is_empty() => fallback.to_owned(),
        _ => err.to_string(),
    }
}
