//! The read operations the inventory needs from the control plane.

use std::future::Future;

use crate::error::Result;
use crate::models::{Cluster, NodePool};

/// Read-only access to GKE cluster and node pool resources.
///
/// Names are fully-qualified resource names such as
/// `projects/{project}/locations/{location}/clusters/{cluster}`. A missing
/// resource is reported as [`crate::ClientError::NotFound`].
pub trait ClusterManager {
    /// Get a cluster by fully-qualified name.
    fn get_cluster(&self, name: &str) -> impl Future<Output = Result<Cluster>> + Send;

    /// Get a node pool by fully-qualified name (`.../nodePools/{pool}`).
    fn get_node_pool(&self, name: &str) -> impl Future<Output = Result<NodePool>> + Send;
}
