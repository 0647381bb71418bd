//! GKE control-plane REST API client.
//!
//! This crate provides a small, read-only, type-safe client for the
//! `container.googleapis.com/v1` cluster and node pool resources. Requests are
//! authenticated with an OAuth 2.0 access token supplied by the caller.

mod api;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use api::ClusterManager;
pub use client::GkeClient;
pub use client::builder::GkeClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    Cluster, ClusterAutoscaling, GoogleApiError, IpAllocationPolicy, MaxPodsConstraint,
    NodeConfig, NodePool, NodePoolAutoscaling, NodeTaint, PrivateClusterConfig,
    VerticalPodAutoscaling,
};
