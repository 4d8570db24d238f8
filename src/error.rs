//! Error types shared across the adapter.

use thiserror::Error;

/// Errors surfaced by the provider adapter.
///
/// Note that the one-shot generation path is fail-soft and converts
/// transport failures into a fallback response instead of returning these;
/// the streaming path propagates them.
#[derive(Error, Debug)]
pub enum LlmError {
    /// HTTP-level failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Upstream API returned a non-success status
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Response body or status text
        message: String,
    },

    /// Upstream payload did not have the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Failure while producing or consuming a stream
    #[error("Stream error: {0}")]
    StreamError(String),

    /// Invalid request input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal invariant violation
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl LlmError {
    /// Create an API error from a status code and message
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}
