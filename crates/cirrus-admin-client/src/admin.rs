//! Administrative operations against the master.
//!
//! Every operation builds one [`AdminRequest`], sends it through the
//! client's transport, and either decodes the payload (reads) or discards it
//! (mutations). Transport errors are returned as-is; a payload that does not
//! decode into the expected view is a [`ClientError::Decode`].

use serde::de::{DeserializeOwned, Unexpected};
use serde_json::Value;

use cirrus_core::api;
use cirrus_core::{ClusterInfo, ClusterView, DataPartitionInfo, SimpleVolView};

use crate::client::MasterClient;
use crate::error::ClientError;
use crate::request::AdminRequest;

/// Client for admin API operations.
///
/// Created via [`MasterClient::admin`].
pub struct AdminApi<'a> {
    client: &'a MasterClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(client: &'a MasterClient) -> Self {
        Self { client }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: AdminRequest) -> Result<T, ClientError> {
        let path = request.path();
        let buf = self.client.serve_request(request).await?;
        decode_view(&buf).map_err(|err| {
            tracing::error!(path, error = %err, "Failed to decode master reply");
            ClientError::Decode(err)
        })
    }

    async fn execute(&self, request: AdminRequest) -> Result<(), ClientError> {
        self.client.serve_request(request).await?;
        Ok(())
    }

    /// Get the cluster overview.
    #[tracing::instrument(skip(self))]
    pub async fn get_cluster(&self) -> Result<ClusterView, ClientError> {
        self.fetch(AdminRequest::get(api::ADMIN_GET_CLUSTER)).await
    }

    /// Get one data partition of a volume.
    #[tracing::instrument(skip(self))]
    pub async fn get_data_partition(
        &self,
        vol_name: &str,
        partition_id: u64,
    ) -> Result<DataPartitionInfo, ClientError> {
        let request = AdminRequest::get(api::ADMIN_GET_DATA_PARTITION)
            .partition_id(partition_id)
            .vol_name(vol_name);
        self.fetch(request).await
    }

    /// Ask the master to load-check a data partition's replicas.
    #[tracing::instrument(skip(self))]
    pub async fn load_data_partition(
        &self,
        vol_name: &str,
        partition_id: u64,
    ) -> Result<(), ClientError> {
        let request = AdminRequest::get(api::ADMIN_LOAD_DATA_PARTITION)
            .partition_id(partition_id)
            .vol_name(vol_name);
        self.execute(request).await
    }

    /// Create `count` data partitions for a volume.
    #[tracing::instrument(skip(self))]
    pub async fn create_data_partition(&self, vol_name: &str, count: u32) -> Result<(), ClientError> {
        let request = AdminRequest::get(api::ADMIN_CREATE_DATA_PARTITION)
            .vol_name(vol_name)
            .count(count);
        self.execute(request).await
    }

    /// Move a data partition's replica off a node.
    #[tracing::instrument(skip(self))]
    pub async fn decommission_data_partition(
        &self,
        partition_id: u64,
        node_addr: &str,
    ) -> Result<(), ClientError> {
        let request = AdminRequest::get(api::ADMIN_DECOMMISSION_DATA_PARTITION)
            .partition_id(partition_id)
            .node_addr(node_addr);
        self.execute(request).await
    }

    /// Remove a node's replica of a data partition.
    #[tracing::instrument(skip(self))]
    pub async fn delete_data_replica(
        &self,
        partition_id: u64,
        node_addr: &str,
    ) -> Result<(), ClientError> {
        let request = AdminRequest::get(api::ADMIN_DELETE_DATA_REPLICA)
            .partition_id(partition_id)
            .node_addr(node_addr);
        self.execute(request).await
    }

    /// Add a replica of a data partition on a node.
    #[tracing::instrument(skip(self))]
    pub async fn add_data_replica(&self, partition_id: u64, node_addr: &str) -> Result<(), ClientError> {
        let request = AdminRequest::get(api::ADMIN_ADD_DATA_REPLICA)
            .partition_id(partition_id)
            .node_addr(node_addr);
        self.execute(request).await
    }

    /// Mark a volume for deletion.
    #[tracing::instrument(skip(self, auth_key))]
    pub async fn delete_volume(&self, vol_name: &str, auth_key: &str) -> Result<(), ClientError> {
        let request = AdminRequest::get(api::ADMIN_DELETE_VOL)
            .vol_name(vol_name)
            .auth_key(auth_key);
        self.execute(request).await
    }

    /// Change a volume's capacity, replica count and follower-read flag.
    #[tracing::instrument(skip(self, auth_key))]
    pub async fn update_volume(
        &self,
        vol_name: &str,
        capacity: u64,
        replicas: u32,
        follower_read: bool,
        auth_key: &str,
    ) -> Result<(), ClientError> {
        let request = AdminRequest::get(api::ADMIN_UPDATE_VOL)
            .vol_name(vol_name)
            .auth_key(auth_key)
            .capacity(capacity)
            .replica_num(replicas)
            .follower_read(follower_read);
        self.execute(request).await
    }

    /// Create a volume.
    ///
    /// `replicas` is accepted for symmetry with [`update_volume`](Self::update_volume)
    /// but not sent; the master applies its default replica count on creation.
    #[tracing::instrument(skip(self))]
    #[allow(clippy::too_many_arguments)]
    pub async fn create_volume(
        &self,
        vol_name: &str,
        owner: &str,
        mp_count: u32,
        dp_size: u64,
        capacity: u64,
        replicas: u32,
        follower_read: bool,
    ) -> Result<(), ClientError> {
        let request = AdminRequest::get(api::ADMIN_CREATE_VOL)
            .vol_name(vol_name)
            .owner(owner)
            .mp_count(mp_count)
            .dp_size(dp_size)
            .capacity(capacity)
            .follower_read(follower_read);
        self.execute(request).await
    }

    /// Get a volume's summary view.
    #[tracing::instrument(skip(self))]
    pub async fn get_volume_simple_info(&self, vol_name: &str) -> Result<SimpleVolView, ClientError> {
        self.fetch(AdminRequest::get(api::ADMIN_GET_VOL).vol_name(vol_name))
            .await
    }

    /// Get the cluster name and the caller's IP as seen by the master.
    #[tracing::instrument(skip(self))]
    pub async fn get_cluster_info(&self) -> Result<ClusterInfo, ClientError> {
        self.fetch(AdminRequest::get(api::ADMIN_GET_IP)).await
    }

    /// Create a meta partition starting at `inode_start`.
    #[tracing::instrument(skip(self))]
    pub async fn create_meta_partition(
        &self,
        vol_name: &str,
        inode_start: u64,
    ) -> Result<(), ClientError> {
        let request = AdminRequest::get(api::ADMIN_CREATE_META_PARTITION)
            .vol_name(vol_name)
            .inode_start(inode_start);
        self.execute(request).await
    }
}

/// Decode a view, accepting only a JSON object.
///
/// Derived struct impls also accept arrays, which together with defaulted
/// fields would turn a mis-shaped reply into a zero-valued view.
fn decode_view<T: DeserializeOwned>(buf: &[u8]) -> Result<T, serde_json::Error> {
    match serde_json::from_slice::<Value>(buf)? {
        value @ Value::Object(_) => serde_json::from_value(value),
        other => Err(<serde_json::Error as serde::de::Error>::invalid_type(
            unexpected(&other),
            &"a JSON object",
        )),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
