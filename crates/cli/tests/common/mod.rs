//! Shared test utilities for gke-inventory integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write targets files into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `GKE_ACCESS_TOKEN` is set to "test-token" unless overridden.

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a hermetic `gke-inventory` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `GKE_ACCESS_TOKEN` is set to a dummy value to satisfy config validation.
/// - Other GKE env vars are cleared to ensure no leakage from the host.
pub fn gke_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gke-inventory");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("GKE_ACCESS_TOKEN", "test-token");

    cmd.env_remove("GKE_API_BASE_URL")
        .env_remove("GOOGLE_OAUTH_ACCESS_TOKEN")
        .env_remove("GKE_TIMEOUT")
        .env_remove("GKE_ENVIRONMENT")
        .env_remove("GKE_TARGETS_PATH")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic command pointed at a mock API server.
#[allow(dead_code)]
pub fn gke_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = gke_cmd();
    cmd.env("GKE_API_BASE_URL", base_url);
    cmd
}

/// Write a targets file with the given `(project, location, cluster, pool)` entries.
pub fn write_targets(dir: &Path, targets: &[(&str, &str, &str, &str)]) -> PathBuf {
    let entries: Vec<serde_json::Value> = targets
        .iter()
        .map(|(project, location, cluster, pool)| {
            serde_json::json!({
                "project_id": project,
                "location": location,
                "cluster_name": cluster,
                "node_pool_name": pool,
            })
        })
        .collect();
    let path = dir.join("targets.json");
    std::fs::write(&path, serde_json::to_string_pretty(&entries).unwrap()).unwrap();
    path
}
