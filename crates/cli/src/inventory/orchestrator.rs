//! Sequential per-target fetching.
//!
//! Responsibilities:
//! - Fetch the cluster and node pool for each target, one target at a time.
//! - Classify every target as a complete row, an incomplete pair, or a failure.
//! - Accumulate complete rows into a `Report`.
//!
//! Does NOT handle:
//! - Loading targets (see `gke_config::load_targets`).
//! - Writing the report (see `writer.rs`).
//!
//! Invariants:
//! - A failure on one target never aborts the batch.
//! - The node pool is not requested when the cluster fetch failed with an
//!   error other than not-found.
//! - Nothing is retried.

use gke_client::{ClientError, ClusterManager};
use gke_config::FetchTarget;
use tracing::{info, warn};

use super::extract::{cluster_details, node_pool_details};
use super::row::{DetailRow, Report};

/// Result of processing a single target.
#[derive(Debug)]
pub enum TargetOutcome {
    /// Both halves were fetched; the merged row.
    Complete(DetailRow),
    /// At least one half does not exist.
    Incomplete {
        cluster_missing: bool,
        node_pool_missing: bool,
    },
    /// A non-not-found error; the target is skipped.
    Failed(ClientError),
}

impl TargetOutcome {
    /// Console status lines for this outcome.
    pub fn notices(&self, target: &FetchTarget) -> Vec<String> {
        match self {
            TargetOutcome::Complete(_) => Vec::new(),
            TargetOutcome::Incomplete {
                cluster_missing,
                node_pool_missing,
            } => {
                let mut lines = Vec::new();
                if *cluster_missing {
                    lines.push(format!(
                        "Cluster '{}' not found in project '{}' and location '{}'.",
                        target.cluster_name, target.project_id, target.location
                    ));
                }
                if *node_pool_missing {
                    lines.push(format!(
                        "Node pool '{}' not found in cluster '{}'.",
                        target.node_pool_name, target.cluster_name
                    ));
                }
                lines.push(format!(
                    "Could not retrieve details for project {}.",
                    target.project_id
                ));
                lines
            }
            TargetOutcome::Failed(e) => vec![format!(
                "Error retrieving details for project {}: {}",
                target.project_id, e
            )],
        }
    }
}

/// Fetch and extract one target.
pub async fn fetch_target<M: ClusterManager>(api: &M, target: &FetchTarget) -> TargetOutcome {
    let cluster = match api.get_cluster(&target.cluster_resource_name()).await {
        Ok(cluster) => Some(cluster),
        Err(e) if e.is_not_found() => {
            warn!(
                project = %target.project_id,
                location = %target.location,
                cluster = %target.cluster_name,
                "Cluster not found"
            );
            None
        }
        Err(e) => return failed(target, e),
    };

    let node_pool = match api.get_node_pool(&target.node_pool_resource_name()).await {
        Ok(node_pool) => Some(node_pool),
        Err(e) if e.is_not_found() => {
            warn!(
                project = %target.project_id,
                cluster = %target.cluster_name,
                node_pool = %target.node_pool_name,
                "Node pool not found"
            );
            None
        }
        Err(e) => return failed(target, e),
    };

    match (cluster, node_pool) {
        (Some(cluster), Some(node_pool)) => {
            let row = cluster_details(&cluster).merge(node_pool_details(&node_pool));
            info!(
                project = %target.project_id,
                cluster = %target.cluster_name,
                node_pool = %target.node_pool_name,
                fields = row.len(),
                "Fetched target"
            );
            TargetOutcome::Complete(row)
        }
        (cluster, node_pool) => TargetOutcome::Incomplete {
            cluster_missing: cluster.is_none(),
            node_pool_missing: node_pool.is_none(),
        },
    }
}

fn failed(target: &FetchTarget, error: ClientError) -> TargetOutcome {
    warn!(
        project = %target.project_id,
        auth = error.is_auth_error(),
        connection = error.is_connection_error(),
        error = %error,
        "Skipping target"
    );
    TargetOutcome::Failed(error)
}

/// Process every target in order, reporting each outcome to `on_outcome`.
pub async fn run_batch<M, F>(api: &M, targets: &[FetchTarget], mut on_outcome: F) -> Report
where
    M: ClusterManager,
    F: FnMut(&FetchTarget, &TargetOutcome),
{
    let mut report = Report::new();

    for target in targets {
        let outcome = fetch_target(api, target).await;
        on_outcome(target, &outcome);
        if let TargetOutcome::Complete(row) = outcome {
            report.push(row);
        }
    }

    info!(
        targets = targets.len(),
        rows = report.len(),
        "Finished fetching targets"
    );
    report
}
