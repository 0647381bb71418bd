//! Cluster and node pool field extraction.
//!
//! Responsibilities:
//! - Turn a `Cluster` or `NodePool` into an ordered `DetailRow`.
//! - Apply the uniform fallback policy for absent fields.
//!
//! Does NOT handle:
//! - Fetching (see `orchestrator.rs`).
//! - CSV serialization (see `writer.rs`).
//!
//! Invariants:
//! - Absent optional sub-records never fail extraction.
//! - Mappings render as `{'k': 'v'}` with sorted keys, sequences as `['a', 'b']`.

use std::collections::BTreeMap;

use gke_client::{Cluster, NodeConfig, NodePool, NodeTaint};

use super::lookup::{disk_type_label, image_type_label};
use super::row::DetailRow;

/// Fallback for fields that are absent from the API response.
pub const NOT_AVAILABLE: &str = "Not available";

pub mod labels {
    pub const CLUSTER_NAME: &str = "Cluster Name";
    pub const CLUSTER_VERSION: &str = "Version Cluster";
    pub const CONTROL_PLANE_RANGE: &str = "Control plane address range";
    pub const PRIVATE_ENDPOINT: &str = "Private Endpoint";
    pub const NETWORK: &str = "Network";
    pub const SUBNET: &str = "Subnet";
    pub const POD_RANGE: &str = "Cluster Pod IPv4 range (default)";
    pub const MAX_PODS_PER_NODE: &str = "Maximum Pods per Node";
    pub const CLUSTER_LABELS: &str = "Labels";
    pub const VERTICAL_POD_AUTOSCALING: &str = "Vertical Pod Autoscaling";
    pub const AUTOSCALING_PROFILE: &str = "Autoscaling profile";

    pub const NODE_POOL_NAME: &str = "Node Pool name";
    pub const NODE_VERSION: &str = "Node version";
    pub const NUMBER_OF_NODES: &str = "Number of nodes";
    pub const AUTOSCALING: &str = "Autoscaling";
    pub const NODE_ZONES: &str = "Node zones";
    pub const IMAGE_TYPE: &str = "Image type";
    pub const MACHINE_TYPE: &str = "Machine type";
    pub const BOOT_DISK_TYPE: &str = "Boot disk type";
    pub const BOOT_DISK_SIZE: &str = "Boot disk size (per node)";
    pub const TAINTS: &str = "Taints";
    pub const INSTANCE_METADATA: &str = "GCE instance metadata";
}

/// Extract the cluster half of a report row.
pub fn cluster_details(cluster: &Cluster) -> DetailRow {
    let private = cluster.private_cluster_config.as_ref();
    let mut row = DetailRow::new();

    row.insert(labels::CLUSTER_NAME, cluster.name.as_str());
    row.insert(labels::CLUSTER_VERSION, cluster.current_master_version.as_str());
    row.insert(
        labels::CONTROL_PLANE_RANGE,
        or_not_available(private.and_then(|p| p.master_ipv4_cidr_block.as_deref())),
    );
    row.insert(
        labels::PRIVATE_ENDPOINT,
        or_not_available(private.and_then(|p| p.private_endpoint.as_deref())),
    );
    row.insert(labels::NETWORK, cluster.network.as_str());
    row.insert(labels::SUBNET, cluster.subnetwork.as_str());
    row.insert(
        labels::POD_RANGE,
        or_not_available(
            cluster
                .ip_allocation_policy
                .as_ref()
                .and_then(|p| p.cluster_ipv4_cidr_block.as_deref()),
        ),
    );
    row.insert(
        labels::MAX_PODS_PER_NODE,
        cluster
            .default_max_pods_constraint
            .as_ref()
            .and_then(|c| c.max_pods_per_node)
            .map(|n| n.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    );
    row.insert(labels::CLUSTER_LABELS, render_mapping(&cluster.resource_labels));

    let vpa_enabled = cluster
        .vertical_pod_autoscaling
        .as_ref()
        .and_then(|v| v.enabled)
        .unwrap_or(false);
    row.insert(
        labels::VERTICAL_POD_AUTOSCALING,
        if vpa_enabled { "enabled" } else { "disabled" },
    );
    row.insert(
        labels::AUTOSCALING_PROFILE,
        or_not_available(
            cluster
                .autoscaling
                .as_ref()
                .and_then(|a| a.autoscaling_profile.as_deref()),
        ),
    );

    row
}

/// Extract the node pool half of a report row.
pub fn node_pool_details(node_pool: &NodePool) -> DetailRow {
    let config = node_pool.config.as_ref();
    let mut row = DetailRow::new();

    row.insert(labels::NODE_POOL_NAME, node_pool.name.as_str());
    row.insert(labels::NODE_VERSION, node_pool.version.as_str());
    row.insert(labels::NUMBER_OF_NODES, number_of_nodes(node_pool));

    let autoscaling = node_pool
        .autoscaling
        .as_ref()
        .and_then(|a| a.enabled)
        .unwrap_or(false);
    row.insert(labels::AUTOSCALING, if autoscaling { "On" } else { "Off" });
    row.insert(labels::NODE_ZONES, render_sequence(&node_pool.locations));

    row.insert(
        labels::IMAGE_TYPE,
        or_not_available(
            config
                .and_then(|c| c.image_type.as_deref())
                .map(image_type_label),
        ),
    );
    row.insert(
        labels::MACHINE_TYPE,
        or_not_available(config.and_then(|c| c.machine_type.as_deref())),
    );
    row.insert(
        labels::BOOT_DISK_TYPE,
        or_not_available(
            config
                .and_then(|c| c.disk_type.as_deref())
                .map(disk_type_label),
        ),
    );
    row.insert(labels::BOOT_DISK_SIZE, boot_disk_size(config));
    row.insert(
        labels::TAINTS,
        config
            .map(|c| render_taints(&c.taints))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    );
    row.insert(
        labels::INSTANCE_METADATA,
        match config {
            Some(c) => c
                .metadata
                .as_ref()
                .map(render_mapping)
                .unwrap_or_else(|| "{}".to_string()),
            None => NOT_AVAILABLE.to_string(),
        },
    );

    row
}

/// Derive the node count display.
///
/// The `(1 per zone)` suffix is a fixed literal, not a computed per-zone count.
pub fn number_of_nodes(node_pool: &NodePool) -> String {
    if let Some(urls) = &node_pool.instance_group_urls {
        return format!("{} total (1 per zone)", urls.len());
    }
    match node_pool.initial_node_count {
        Some(count) => format!("{count} total"),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn boot_disk_size(config: Option<&NodeConfig>) -> String {
    let size = config
        .and_then(|c| c.disk_size_gb)
        .map(|n| n.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    format!("{size} GB")
}

/// `key=value` pairs joined by `", "`; the effect is not shown.
pub fn render_taints(taints: &[NodeTaint]) -> String {
    if taints.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    taints
        .iter()
        .map(|t| format!("{}={}", t.key, t.value))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_mapping(map: &BTreeMap<String, String>) -> String {
    let body = map
        .iter()
        .map(|(k, v)| format!("{}: {}", quote(k), quote(v)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}

pub fn render_sequence(items: &[String]) -> String {
    let body = items.iter().map(|s| quote(s)).collect::<Vec<_>>().join(", ");
    format!("[{body}]")
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}
