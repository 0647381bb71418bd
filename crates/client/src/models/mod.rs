//! Data models for GKE API responses.
//!
//! Only the fields the inventory reports are modelled; everything else in the
//! response is ignored. Every sub-record is optional because the API omits
//! unset messages entirely.

pub mod cluster;
pub mod common;
pub mod node_pool;

pub use cluster::{
    Cluster, ClusterAutoscaling, IpAllocationPolicy, MaxPodsConstraint, PrivateClusterConfig,
    VerticalPodAutoscaling,
};
pub use common::{GoogleApiError, GoogleErrorBody};
pub use node_pool::{NodeConfig, NodePool, NodePoolAutoscaling, NodeTaint};
