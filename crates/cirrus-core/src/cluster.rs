//! Cluster-wide views.

use serde::{Deserialize, Serialize};

use crate::VolStatInfo;

/// Snapshot of the whole cluster as seen by the master leader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClusterView {
    /// Cluster name.
    pub name: String,

    /// Address of the current master leader.
    pub leader_addr: String,

    /// Whether automatic data partition allocation is disabled.
    pub disable_auto_alloc: bool,

    /// Memory usage ratio above which a meta node stops taking partitions.
    pub meta_node_threshold: f32,

    /// Raft index applied by the master.
    pub applied: u64,

    #[serde(rename = "MaxDataPartitionID")]
    pub max_data_partition_id: u64,

    #[serde(rename = "MaxMetaNodeID")]
    pub max_meta_node_id: u64,

    #[serde(rename = "MaxMetaPartitionID")]
    pub max_meta_partition_id: u64,

    /// Aggregate space usage of data nodes.
    pub data_node_stat_info: Option<NodeStatInfo>,

    /// Aggregate memory usage of meta nodes.
    pub meta_node_stat_info: Option<NodeStatInfo>,

    /// Per-volume space usage.
    pub vol_stat_info: Vec<VolStatInfo>,

    #[serde(rename = "BadPartitionIDs")]
    pub bad_partition_ids: Vec<BadPartitionView>,

    #[serde(rename = "BadMetaPartitionIDs")]
    pub bad_meta_partition_ids: Vec<BadPartitionView>,

    pub meta_nodes: Vec<NodeView>,
    pub data_nodes: Vec<NodeView>,
}

impl ClusterView {
    /// Get a data node by address.
    pub fn data_node(&self, addr: &str) -> Option<&NodeView> {
        self.data_nodes.iter().find(|n| n.addr == addr)
    }

    /// Get a meta node by address.
    pub fn meta_node(&self, addr: &str) -> Option<&NodeView> {
        self.meta_nodes.iter().find(|n| n.addr == addr)
    }

    /// Count of data nodes currently reported active.
    pub fn active_data_nodes(&self) -> usize {
        self.data_nodes.iter().filter(|n| n.status).count()
    }
}

/// A data or meta node entry in the cluster view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NodeView {
    pub addr: String,

    /// True when the node is active.
    pub status: bool,

    #[serde(rename = "ID")]
    pub id: u64,

    pub is_writable: bool,
}

/// Aggregate capacity numbers for one node class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStatInfo {
    #[serde(rename = "TotalGB")]
    pub total_gb: u64,

    #[serde(rename = "UsedGB")]
    pub used_gb: u64,

    #[serde(rename = "IncreasedGB")]
    pub increased_gb: i64,

    #[serde(rename = "UsedRatio")]
    pub used_ratio: String,
}

/// Partitions found unhealthy on one disk path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadPartitionView {
    #[serde(rename = "Path")]
    pub path: String,

    #[serde(rename = "PartitionIDs")]
    pub partition_ids: Vec<u64>,
}

/// Cluster name plus the caller's address as seen by the master.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterInfo {
    #[serde(rename = "Cluster")]
    pub cluster: String,

    #[serde(rename = "Ip")]
    pub ip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_view_decodes_master_field_names() {
        let json = r#"{
            "Name": "cirrus-test",
            "LeaderAddr": "10.0.0.1:17010",
            "DisableAutoAlloc": false,
            "MetaNodeThreshold": 0.75,
            "Applied": 1024,
            "MaxDataPartitionID": 300,
            "MaxMetaNodeID": 12,
            "MaxMetaPartitionID": 40,
            "DataNodeStatInfo": {"TotalGB": 100, "UsedGB": 20, "IncreasedGB": 1, "UsedRatio": "0.2"},
            "VolStatInfo": [{"Name": "vol1", "TotalSize": 10, "UsedSize": 1, "UsedRatio": "0.1"}],
            "BadPartitionIDs": [{"Path": "10.0.0.2:/disk1", "PartitionIDs": [7, 9]}],
            "DataNodes": [
                {"Addr": "10.0.0.2:17310", "Status": true, "ID": 3, "IsWritable": true},
                {"Addr": "10.0.0.3:17310", "Status": false, "ID": 4, "IsWritable": false}
            ],
            "Unknown": "ignored"
        }"#;

        let view: ClusterView = serde_json::from_str(json).unwrap();
        assert_eq!(view.name, "cirrus-test");
        assert_eq!(view.max_data_partition_id, 300);
        assert_eq!(view.data_node_stat_info.as_ref().unwrap().total_gb, 100);
        assert!(view.meta_node_stat_info.is_none());
        assert_eq!(view.vol_stat_info[0].name, "vol1");
        assert_eq!(view.bad_partition_ids[0].partition_ids, vec![7, 9]);
        assert!(view.meta_nodes.is_empty());

        assert_eq!(view.active_data_nodes(), 1);
        assert_eq!(view.data_node("10.0.0.3:17310").unwrap().id, 4);
        assert!(view.meta_node("10.0.0.2:17310").is_none());
    }

    #[test]
    fn test_cluster_info_decode() {
        let info: ClusterInfo =
            serde_json::from_str(r#"{"Cluster": "cirrus-test", "Ip": "192.168.0.8"}"#).unwrap();
        assert_eq!(info.cluster, "cirrus-test");
        assert_eq!(info.ip, "192.168.0.8");
    }

    #[test]
    fn test_cluster_info_requires_fields() {
        let result: Result<ClusterInfo, _> = serde_json::from_str(r#"{"Cluster": 5}"#);
        assert!(result.is_err());
    }
}
