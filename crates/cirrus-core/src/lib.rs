//! Cirrus Core Domain Types
//!
//! This crate contains the views returned by the Cirrus master with no
//! dependencies on:
//! - Network/HTTP
//! - Runtime specifics
//!
//! Field names follow the master's JSON encoding so the types decode
//! directly from its replies.

pub mod api;
pub mod cluster;
pub mod partition;
pub mod volume;

// Re-export commonly used types
pub use cluster::{BadPartitionView, ClusterInfo, ClusterView, NodeStatInfo, NodeView};
pub use partition::{DataPartitionInfo, DataReplica, PartitionStatus, Peer};
pub use volume::{SimpleVolView, VolStatInfo};
