//! Admin client configuration.

/// Admin client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Master base URL.
    pub master_addr: String,

    /// Per-request timeout (seconds).
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            master_addr: "http://127.0.0.1:17010".to_string(),
            timeout_secs: 10,
        }
    }
}
