//! Main GKE REST API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `clusters`: Cluster and node pool read methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Obtaining access tokens (the caller supplies one)
//!
//! # Invariants
//! - Every call is a single read-only GET; there is no retry or caching layer.

pub mod builder;
mod clusters;

use secrecy::SecretString;

/// GKE control-plane REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use gke_client::GkeClient;
/// use secrecy::SecretString;
///
/// let client = GkeClient::builder()
///     .base_url("https://container.googleapis.com".to_string())
///     .access_token(SecretString::new("ya29....".to_string().into()))
///     .build()?;
/// let cluster = client
///     .get_cluster("projects/acme/locations/europe-west1/clusters/apps")
///     .await?;
/// ```
#[derive(Debug)]
pub struct GkeClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) access_token: SecretString,
}

impl GkeClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GkeClientBuilder {
        builder::GkeClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
