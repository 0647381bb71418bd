//! Cluster and node pool API methods for [`GkeClient`].

use secrecy::ExposeSecret;

use crate::api::ClusterManager;
use crate::client::GkeClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Cluster, NodePool};

impl GkeClient {
    /// Get a cluster by fully-qualified resource name.
    pub async fn get_cluster(&self, name: &str) -> Result<Cluster> {
        endpoints::get_cluster(
            &self.http,
            &self.base_url,
            self.access_token.expose_secret(),
            name,
        )
        .await
    }

    /// Get a node pool by fully-qualified resource name.
    pub async fn get_node_pool(&self, name: &str) -> Result<NodePool> {
        endpoints::get_node_pool(
            &self.http,
            &self.base_url,
            self.access_token.expose_secret(),
            name,
        )
        .await
    }
}

impl ClusterManager for GkeClient {
    async fn get_cluster(&self, name: &str) -> Result<Cluster> {
        GkeClient::get_cluster(self, name).await
    }

    async fn get_node_pool(&self, name: &str) -> Result<NodePool> {
        GkeClient::get_node_pool(self, name).await
    }
}
