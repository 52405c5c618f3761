//! Error Types

use thiserror::Error;

/// Result type alias for market data operations
pub type Result<T> = std::result::Result<T, MarketDataError>;

/// Market data client errors
///
/// These never cross the trait surface: [`crate::MarketDataApi`]
/// implementations log the cause and hand out an empty snapshot.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// Transport-level failure (connect, timeout, TLS, body decode)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream status {0}")]
    Status(u16),

    /// Payload did not match the documented shape
    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),
}
