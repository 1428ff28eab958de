//! Master client handle.

use std::sync::Arc;

use crate::admin::AdminApi;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::HttpTransport;
use crate::request::AdminRequest;
use crate::transport::Transport;

/// Handle to the master, shared by the API groups.
///
/// Cheap to clone; all clones use the same transport.
#[derive(Clone)]
pub struct MasterClient {
    transport: Arc<dyn Transport>,
}

impl MasterClient {
    /// Create a client over any transport.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Create a client over a shared transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a client using the HTTP transport.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }

    /// Administrative operations.
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    pub(crate) async fn serve_request(&self, request: AdminRequest) -> Result<Vec<u8>, ClientError> {
        self.transport.serve_request(request).await
    }
}
