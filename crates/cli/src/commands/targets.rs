//! Targets command implementation.
//!
//! Lists what `report` would fetch, without calling the API.

use anyhow::{Context, Result};
use gke_config::{ConfigLoader, FetchTarget, load_targets};
use serde::Serialize;

#[derive(Serialize)]
struct TargetEntry<'a> {
    #[serde(flatten)]
    target: &'a FetchTarget,
    cluster_resource_name: String,
    node_pool_resource_name: String,
}

pub fn run(loader: &ConfigLoader, json: bool) -> Result<()> {
    let report_config = loader.build_report_config();
    let targets = load_targets(&report_config.targets_path).context("Failed to load targets")?;

    let output = if json {
        format_json(&targets)?
    } else {
        format_lines(&targets)
    };
    print!("{output}");

    Ok(())
}

fn format_json(targets: &[FetchTarget]) -> Result<String> {
    let entries: Vec<TargetEntry<'_>> = targets
        .iter()
        .map(|target| TargetEntry {
            target,
            cluster_resource_name: target.cluster_resource_name(),
            node_pool_resource_name: target.node_pool_resource_name(),
        })
        .collect();
    let mut output = serde_json::to_string_pretty(&entries).context("Failed to serialize targets")?;
    output.push('\n');
    Ok(output)
}

fn format_lines(targets: &[FetchTarget]) -> String {
    if targets.is_empty() {
        return "No targets configured.\n".to_string();
    }
    targets
        .iter()
        .map(|t| format!("{}\n", t.node_pool_resource_name()))
        .collect()
}
