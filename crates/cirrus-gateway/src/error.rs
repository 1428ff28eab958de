//! Gateway errors.

use thiserror::Error;

/// Errors raised while rendering an error response.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Envelope could not be encoded.
    #[error("XML serialization error: {0}")]
    Serialize(String),

    /// Envelope could not be parsed.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// Writing to the response channel failed.
    #[error("response write failed: {0}")]
    Io(#[from] std::io::Error),
}
