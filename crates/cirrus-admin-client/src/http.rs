//! HTTP transport to the master's REST endpoints.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::request::AdminRequest;
use crate::transport::Transport;

/// Reply envelope wrapped around every master response.
#[derive(Debug, Deserialize)]
struct MasterReply {
    code: i32,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    data: Value,
}

/// HTTP transport for a single master address.
pub struct HttpTransport {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        Ok(Self {
            inner,
            base_url: config.master_addr.trim_end_matches('/').to_string(),
        })
    }

    /// Master base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(skip(self, request), fields(path = request.path()))]
    async fn serve_request(&self, request: AdminRequest) -> Result<Vec<u8>, ClientError> {
        let url = format!("{}{}", self.base_url, request.path());
        debug!(url = %url, method = %request.method(), "Sending admin request");

        let response = self
            .inner
            .request(request.method().clone(), &url)
            .query(request.params())
            .send()
            .await?;

        let status = response.status();
        debug!(status = %status, "Received master response");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Failed to read response body"));
            return Err(ClientError::Status {
                status: status.as_u16(),
                path: request.path().to_string(),
                body,
            });
        }

        let body = response.bytes().await?;
        let reply: MasterReply =
            serde_json::from_slice(&body).map_err(|e| ClientError::InvalidReply(e.to_string()))?;

        if reply.code != 0 {
            return Err(ClientError::Master {
                code: reply.code,
                msg: reply.msg,
            });
        }

        serde_json::to_vec(&reply.data).map_err(|e| ClientError::InvalidReply(e.to_string()))
    }
}
