//! Transport seam between typed operations and the network.

use async_trait::async_trait;

use crate::error::ClientError;
use crate::request::AdminRequest;

/// Delivers one admin request and returns the raw reply payload.
///
/// Implementations own timeouts, retries and leader discovery. Operations
/// built on top call `serve_request` exactly once and pass its error through
/// untouched.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the payload bytes.
    async fn serve_request(&self, request: AdminRequest) -> Result<Vec<u8>, ClientError>;
}
