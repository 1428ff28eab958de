//! Admin client library for the Cirrus master.
//!
//! Builds typed administrative requests (volumes, data and meta partitions,
//! replicas), hands them to a [`Transport`], and decodes the master's JSON
//! replies into the view types from `cirrus-core`.

pub mod admin;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod transport;

pub use admin::AdminApi;
pub use client::MasterClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::HttpTransport;
pub use request::AdminRequest;
pub use transport::Transport;
