/*
[INPUT]:  Error sources (validation, network transport, exchange responses)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Binance futures adapter
#[derive(Error, Debug)]
pub enum BinanceError {
    /// User input or configuration rejected before any network call
    #[error("{reason}")]
    Validation { field: &'static str, reason: String },

    /// Exchange unreachable (DNS failure, refused connection, TLS)
    #[error("Network error: {0}")]
    Connection(String),

    /// The fixed request timeout elapsed
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// Exchange reported a failure, or returned a non-JSON body (code -1)
    #[error("Binance API Error {code}: {message}")]
    Api { code: i64, message: String },

    /// Anything that does not fit the categories above
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl BinanceError {
    /// Build a validation error for a named input field
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        BinanceError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for BinanceError {
    fn from(err: serde_json::Error) -> Self {
        BinanceError::Unexpected(format!("JSON error: {err}"))
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, BinanceError>;
