//! Volume views.

use serde::{Deserialize, Serialize};

/// Summary of a volume's configuration and partition counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SimpleVolView {
    #[serde(rename = "ID")]
    pub id: u64,

    pub name: String,
    pub owner: String,
    pub zone_name: String,

    pub dp_replica_num: u8,
    pub mp_replica_num: u8,
    pub status: u8,

    /// Capacity in GB.
    pub capacity: u64,

    /// Number of read-write data partitions.
    pub rw_dp_cnt: i64,
    pub mp_cnt: i64,
    pub dp_cnt: i64,

    pub follower_read: bool,
    pub need_to_lower_replica: bool,
    pub authenticate: bool,
    pub cross_zone: bool,

    pub create_time: String,
    pub description: String,
}

impl SimpleVolView {
    /// Status value the master uses for volumes marked for deletion.
    pub const STATUS_MARK_DELETE: u8 = 1;

    /// Returns true once the volume has been marked for deletion.
    pub fn is_marked_deleted(&self) -> bool {
        self.status == Self::STATUS_MARK_DELETE
    }
}

/// Space usage of one volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VolStatInfo {
    pub name: String,
    pub total_size: u64,
    pub used_size: u64,
    pub used_ratio: String,
    pub enable_token: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_vol_view_decode() {
        let json = r#"{
            "ID": 5,
            "Name": "vol1",
            "Owner": "u1",
            "DpReplicaNum": 3,
            "MpReplicaNum": 3,
            "Status": 0,
            "Capacity": 1000,
            "RwDpCnt": 10,
            "MpCnt": 3,
            "DpCnt": 12,
            "FollowerRead": true,
            "CreateTime": "2024-01-02 03:04:05"
        }"#;

        let vv: SimpleVolView = serde_json::from_str(json).unwrap();
        assert_eq!(vv.name, "vol1");
        assert_eq!(vv.owner, "u1");
        assert_eq!(vv.capacity, 1000);
        assert_eq!(vv.mp_cnt, 3);
        assert!(vv.follower_read);
        assert!(!vv.is_marked_deleted());
        assert!(vv.zone_name.is_empty());
    }
}
