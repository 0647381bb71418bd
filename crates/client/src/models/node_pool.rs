//! Node pool resource model (`projects.locations.clusters.nodePools`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::opt_u64_from_string_or_number;

/// A node pool as returned by `GET /v1/.../clusters/*/nodePools/*`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePool {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    /// Zones the pool's nodes run in.
    #[serde(default)]
    pub locations: Vec<String>,
    pub config: Option<NodeConfig>,
    pub autoscaling: Option<NodePoolAutoscaling>,
    /// One managed instance group per zone. `None` when the field is absent.
    pub instance_group_urls: Option<Vec<String>>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub initial_node_count: Option<u64>,
}

/// Per-node machine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    pub machine_type: Option<String>,
    pub image_type: Option<String>,
    pub disk_type: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub disk_size_gb: Option<u64>,
    #[serde(default)]
    pub taints: Vec<NodeTaint>,
    pub metadata: Option<BTreeMap<String, String>>,
}

/// Kubernetes taint applied to every node in the pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeTaint {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    pub effect: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodePoolAutoscaling {
    pub enabled: Option<bool>,
}
