//! Fetch targets read from the targets file.

use serde::{Deserialize, Serialize};

/// One cluster/node-pool pair to report on.
///
/// Loaded verbatim from the targets file; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchTarget {
    pub project_id: String,
    pub location: String,
    pub cluster_name: String,
    pub node_pool_name: String,
}

impl FetchTarget {
    /// Fully-qualified cluster resource name.
    pub fn cluster_resource_name(&self) -> String {
        format!(
            "projects/{}/locations/{}/clusters/{}",
            self.project_id, self.location, self.cluster_name
        )
    }

    /// Fully-qualified node pool resource name.
    pub fn node_pool_resource_name(&self) -> String {
        format!(
            "{}/nodePools/{}",
            self.cluster_resource_name(),
            self.node_pool_name
        )
    }
}
