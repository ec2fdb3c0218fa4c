use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure categories surfaced by the API client.
///
/// Every fallible UI action resolves to one of these so pages can show a
/// user-facing message instead of letting a rejected call vanish into the
/// console.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Credentials were rejected or the stored token is stale.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The request never produced an HTTP response.
    #[error("could not reach the server")]
    NetworkUnavailable,

    /// The server rejected the request body.
    #[error("invalid request: {0}")]
    ValidationFailed(String),

    /// The requested entity does not exist (or no longer exists).
    #[error("not found")]
    NotFound,

    /// Any other HTTP failure, carrying the status code.
    #[error("unexpected server response ({0})")]
    Unexpected(u16),
}

impl ApiError {
    /// Message suitable for an inline alert.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthenticationFailed => "Invalid credentials".to_string(),
            Self::NetworkUnavailable => "Unable to connect to server".to_string(),
            Self::ValidationFailed(detail) => format!("Request rejected: {detail}"),
            Self::NotFound => "That item no longer exists".to_string(),
            Self::Unexpected(status) => format!("Request failed: {status}"),
        }
    }
}

/// Error body the API attaches to non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable reason for the failure.
    pub error: String,
}
