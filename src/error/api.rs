//! Errors from talking to the GreenLens backend.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Longest raw body excerpt kept in a `Status` message.
const MAX_BODY_EXCERPT: usize = 200;

/// Failure of a single backend request.
///
/// `Clone` so results can travel through `AppMessage`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No HTTP response was received.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The backend replied with a non-2xx status.
    #[error("{url} returned HTTP {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    /// The backend replied 2xx with a body that does not match the schema.
    #[error("unexpected response body from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    /// Build an error for a request that never got a response.
    pub fn transport(url: &str, err: &HttpError) -> Self {
        ApiError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    /// Build a status error, preferring the backend's `{"error": "..."}` field.
    pub fn status(url: &str, status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| body_excerpt(body));
        ApiError::Status {
            url: url.to_string(),
            status,
            message,
        }
    }

    /// Build a decode error.
    pub fn decode(url: &str, err: &serde_json::Error) -> Self {
        ApiError::Decode {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Transport { .. } => ErrorCategory::Transport,
            ApiError::Status { .. } | ApiError::Decode { .. } => ErrorCategory::Protocol,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "E_API_TRANSPORT",
            ApiError::Status { .. } => "E_API_STATUS",
            ApiError::Decode { .. } => "E_API_DECODE",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport { .. } => {
                "Server error: could not reach the GreenLens server.".to_string()
            }
            ApiError::Status {
                status, message, ..
            } => {
                if message.is_empty() {
                    format!("Server error (HTTP {}).", status)
                } else {
                    format!("Server error (HTTP {}): {}", status, message)
                }
            }
            ApiError::Decode { .. } => {
                "Server error: the server sent a response that could not be read.".to_string()
            }
        }
    }
}

fn body_excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    match trimmed.char_indices().nth(MAX_BODY_EXCERPT) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
