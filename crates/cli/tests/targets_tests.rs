//! Integration tests for `gke-inventory targets`.

mod common;

use common::{gke_cmd, write_targets};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_targets_lists_node_pool_resource_names() {
    let temp_dir = TempDir::new().unwrap();
    let targets = write_targets(
        temp_dir.path(),
        &[
            ("proj-a", "europe-west1", "apps", "default-pool"),
            ("proj-b", "us-central1-a", "batch", "gpu-pool"),
        ],
    );

    gke_cmd()
        .args(["targets", "--targets"])
        .arg(&targets)
        .assert()
        .success()
        .stdout(
            "projects/proj-a/locations/europe-west1/clusters/apps/nodePools/default-pool\n\
             projects/proj-b/locations/us-central1-a/clusters/batch/nodePools/gpu-pool\n",
        );
}

#[test]
fn test_targets_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let targets = write_targets(
        temp_dir.path(),
        &[("proj-a", "europe-west1", "apps", "default-pool")],
    );

    let output = gke_cmd()
        .args(["targets", "--json", "--targets"])
        .arg(&targets)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["cluster_name"], "apps");
    assert_eq!(
        value[0]["cluster_resource_name"],
        "projects/proj-a/locations/europe-west1/clusters/apps"
    );
}

#[test]
fn test_targets_does_not_require_access_token() {
    let temp_dir = TempDir::new().unwrap();
    let targets = write_targets(temp_dir.path(), &[]);

    gke_cmd()
        .env_remove("GKE_ACCESS_TOKEN")
        .args(["targets", "--targets"])
        .arg(&targets)
        .assert()
        .success()
        .stdout(predicate::str::contains("No targets configured."));
}

#[test]
fn test_targets_uses_environment_default_path() {
    let temp_dir = TempDir::new().unwrap();

    gke_cmd()
        .current_dir(temp_dir.path())
        .args(["--environment", "STAGING", "targets"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("STAGING.json"));
}

#[test]
fn test_help_lists_subcommands() {
    gke_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("report")
            .and(predicate::str::contains("targets"))
            .and(predicate::str::contains("--environment")),
    );
}
