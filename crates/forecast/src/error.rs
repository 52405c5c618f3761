//! Error Types

use thiserror::Error;

/// Result type alias for forecast operations
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Forecast client errors
///
/// Internal only: [`crate::ForecastClient::request_forecast`] maps each
/// of these to a user-facing string before returning.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Transport-level failure (connect, timeout, TLS, body decode)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response parsed but carried no usable content
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
