//! CLI command implementations.

pub mod report;
pub mod targets;

use anyhow::{Context, Result};
use gke_client::GkeClient;
use gke_config::Config;

/// Build a GKE client from the resolved connection configuration.
pub fn build_client_from_config(config: &Config) -> Result<GkeClient> {
    GkeClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build GKE client")
}
