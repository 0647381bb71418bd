//! Cluster and node pool endpoints.

use reqwest::Client;
use serde::de::DeserializeOwned;

use gke_config::constants::API_VERSION;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{Cluster, NodePool};

/// Get a cluster by fully-qualified name.
pub async fn get_cluster(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    name: &str,
) -> Result<Cluster> {
    get_resource(client, base_url, auth_token, name, "cluster").await
}

/// Get a node pool by fully-qualified name.
pub async fn get_node_pool(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    name: &str,
) -> Result<NodePool> {
    get_resource(client, base_url, auth_token, name, "node pool").await
}

async fn get_resource<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    name: &str,
    kind: &str,
) -> Result<T> {
    let url = format!("{}/{}/{}", base_url, API_VERSION, name);

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token));
    let response = send_request(builder, name).await?;

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse {}: {}", kind, e)))
}
