//! Data partition views.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Status of a data partition as reported by the master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionStatus {
    /// No replica can serve requests.
    Unavailable,
    /// Readable but not accepting writes.
    ReadOnly,
    /// Accepting reads and writes.
    ReadWrite,
    /// Status code this client does not know.
    Unknown(i8),
}

impl From<i8> for PartitionStatus {
    fn from(code: i8) -> Self {
        match code {
            -1 => Self::Unavailable,
            1 => Self::ReadOnly,
            2 => Self::ReadWrite,
            other => Self::Unknown(other),
        }
    }
}

/// Full information about one data partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataPartitionInfo {
    #[serde(rename = "PartitionID")]
    pub partition_id: u64,

    /// Unix seconds of the last load check.
    pub last_loaded_time: i64,

    pub replica_num: u8,

    /// Raw status code, see [`PartitionStatus`].
    pub status: i8,

    pub replicas: Vec<DataReplica>,

    /// Replica hosts, leader candidate first.
    pub hosts: Vec<String>,

    pub peers: Vec<Peer>,
    pub zones: Vec<String>,

    /// Hosts missing the partition, keyed by address, with the time first noticed.
    pub missing_nodes: HashMap<String, i64>,

    pub vol_name: String,

    #[serde(rename = "VolID")]
    pub vol_id: u64,

    #[serde(rename = "OfflinePeerID")]
    pub offline_peer_id: u64,

    pub files_with_missing_replica: HashMap<String, i64>,
}

impl DataPartitionInfo {
    /// Decoded partition status.
    pub fn partition_status(&self) -> PartitionStatus {
        PartitionStatus::from(self.status)
    }

    /// The replica currently acting as raft leader, if any reported one.
    pub fn leader(&self) -> Option<&DataReplica> {
        self.replicas.iter().find(|r| r.is_leader)
    }

    /// Check if a host carries a replica of this partition.
    pub fn has_host(&self, addr: &str) -> bool {
        self.hosts.iter().any(|h| h == addr)
    }
}

/// One replica of a data partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataReplica {
    pub addr: String,
    pub report_time: i64,
    pub file_count: u32,
    pub status: i8,
    pub has_load_response: bool,

    #[serde(rename = "TotalSize")]
    pub total: u64,

    #[serde(rename = "UsedSize")]
    pub used: u64,

    pub is_leader: bool,
    pub needs_to_compare: bool,
    pub disk_path: String,
}

/// Raft peer of a partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    pub id: u64,
    pub addr: String,
}
