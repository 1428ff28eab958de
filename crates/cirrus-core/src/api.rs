//! Master admin endpoint paths.

/// Cluster overview.
pub const ADMIN_GET_CLUSTER: &str = "/admin/getCluster";
/// Cluster name and caller IP.
pub const ADMIN_GET_IP: &str = "/admin/getIp";

pub const ADMIN_GET_DATA_PARTITION: &str = "/dataPartition/get";
pub const ADMIN_LOAD_DATA_PARTITION: &str = "/dataPartition/load";
pub const ADMIN_CREATE_DATA_PARTITION: &str = "/dataPartition/create";
pub const ADMIN_DECOMMISSION_DATA_PARTITION: &str = "/dataPartition/decommission";

pub const ADMIN_DELETE_DATA_REPLICA: &str = "/dataReplica/delete";
pub const ADMIN_ADD_DATA_REPLICA: &str = "/dataReplica/add";

pub const ADMIN_CREATE_VOL: &str = "/admin/createVol";
pub const ADMIN_GET_VOL: &str = "/admin/getVol";
pub const ADMIN_DELETE_VOL: &str = "/vol/delete";
pub const ADMIN_UPDATE_VOL: &str = "/vol/update";

pub const ADMIN_CREATE_META_PARTITION: &str = "/metaPartition/create";
