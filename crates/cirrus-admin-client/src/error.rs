//! Error types for the admin client.

use thiserror::Error;

/// Errors that can occur when using the admin client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Failed to establish connection.
    #[error("connection failed: {0}")]
    Connection(String),

    /// HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Master answered with a non-success HTTP status.
    #[error("HTTP {status}: {path}: {body}")]
    Status {
        status: u16,
        path: String,
        /// Response body, passed through as opaque detail.
        body: String,
    },

    /// Master rejected the request.
    #[error("master error {code}: {msg}")]
    Master { code: i32, msg: String },

    /// Master reply did not follow the reply envelope.
    #[error("invalid reply: {0}")]
    InvalidReply(String),

    /// Reply payload did not match the expected type.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
