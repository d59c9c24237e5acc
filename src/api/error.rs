//! API Error Types
//!
//! Errors surfaced by the client layer, and extraction of the human-readable
//! `detail` the backend attaches to failed responses.

use thiserror::Error;

/// Client-side error taxonomy
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Caught before dispatch (missing required field, malformed input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-success HTTP response
    #[error("API error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Server { status: u16, detail: Option<String> },

    /// Connection failure, timeout or other transport problem
    #[error("Network error: {0}")]
    Network(String),

    /// Success status with a body that doesn't match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a server error from a failed response body
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Server {
            status,
            detail: extract_detail(body),
        }
    }

    /// Message to show the user: the validation text or server detail when
    /// there is one, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(message) => message.clone(),
            ApiError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status for server errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull the `detail` out of a FastAPI-style error body.
///
/// `detail` is either a string or a list of validation entries carrying a
/// `msg`; list messages are joined with `; `.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    match value.get("detail")? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        serde_json::Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;
