//! Admin request builder.

use reqwest::Method;

/// A single administrative request: verb, endpoint path and query parameters.
///
/// Parameters can only be set through the typed helpers below, which fix the
/// key name and string encoding the master expects for each value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRequest {
    method: Method,
    path: &'static str,
    params: Vec<(&'static str, String)>,
}

impl AdminRequest {
    /// Create a request with no parameters.
    pub fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            params: Vec::new(),
        }
    }

    /// Create a GET request.
    pub fn get(path: &'static str) -> Self {
        Self::new(Method::GET, path)
    }

    /// HTTP verb.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Endpoint path on the master.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Parameters in insertion order.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Look up a parameter value by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    // Keys are unique; a repeated key keeps its original position.
    fn add_param(mut self, key: &'static str, value: String) -> Self {
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    /// Volume name (`name`).
    pub fn vol_name(self, name: &str) -> Self {
        self.add_param("name", name.to_string())
    }

    /// Partition id (`id`).
    pub fn partition_id(self, id: u64) -> Self {
        self.add_param("id", id.to_string())
    }

    /// Number of partitions to create (`count`).
    pub fn count(self, count: u32) -> Self {
        self.add_param("count", count.to_string())
    }

    /// Node address (`addr`).
    pub fn node_addr(self, addr: &str) -> Self {
        self.add_param("addr", addr.to_string())
    }

    /// Volume owner's auth key (`authKey`).
    pub fn auth_key(self, key: &str) -> Self {
        self.add_param("authKey", key.to_string())
    }

    /// Volume owner (`owner`).
    pub fn owner(self, owner: &str) -> Self {
        self.add_param("owner", owner.to_string())
    }

    /// Capacity in GB (`capacity`).
    pub fn capacity(self, capacity: u64) -> Self {
        self.add_param("capacity", capacity.to_string())
    }

    /// Replica count (`replicaNum`).
    pub fn replica_num(self, replicas: u32) -> Self {
        self.add_param("replicaNum", replicas.to_string())
    }

    /// Allow reads from followers (`followerRead`), encoded as `true`/`false`.
    pub fn follower_read(self, enabled: bool) -> Self {
        self.add_param("followerRead", enabled.to_string())
    }

    /// Initial meta partition count (`mpCount`).
    pub fn mp_count(self, count: u32) -> Self {
        self.add_param("mpCount", count.to_string())
    }

    /// Data partition size in GB (`size`).
    pub fn dp_size(self, size: u64) -> Self {
        self.add_param("size", size.to_string())
    }

    /// First inode of a new meta partition (`start`).
    pub fn inode_start(self, start: u64) -> Self {
        self.add_param("start", start.to_string())
    }
}
