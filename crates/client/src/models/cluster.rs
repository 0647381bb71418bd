//! Cluster resource model (`projects.locations.clusters`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::opt_u64_from_string_or_number;

/// A GKE cluster as returned by `GET /v1/projects/*/locations/*/clusters/*`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub current_master_version: String,
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub subnetwork: String,
    #[serde(default)]
    pub resource_labels: BTreeMap<String, String>,
    pub private_cluster_config: Option<PrivateClusterConfig>,
    pub ip_allocation_policy: Option<IpAllocationPolicy>,
    pub default_max_pods_constraint: Option<MaxPodsConstraint>,
    pub vertical_pod_autoscaling: Option<VerticalPodAutoscaling>,
    pub autoscaling: Option<ClusterAutoscaling>,
}

/// Private cluster settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateClusterConfig {
    pub master_ipv4_cidr_block: Option<String>,
    pub private_endpoint: Option<String>,
}

/// Pod and service IP allocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAllocationPolicy {
    pub cluster_ipv4_cidr_block: Option<String>,
}

/// Default pods-per-node constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxPodsConstraint {
    /// int64 on the wire, so usually a JSON string.
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub max_pods_per_node: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerticalPodAutoscaling {
    pub enabled: Option<bool>,
}

/// Cluster autoscaler settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterAutoscaling {
    /// `BALANCED`, `OPTIMIZE_UTILIZATION` or `PROFILE_UNSPECIFIED`.
    pub autoscaling_profile: Option<String>,
}
