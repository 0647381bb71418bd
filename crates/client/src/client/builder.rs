//! Client builder for constructing [`GkeClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, access_token)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout)
//!
//! # Invariants
//! - `base_url` and `access_token` must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use gke_config::Config;
use gke_config::constants::DEFAULT_TIMEOUT_SECS;
use secrecy::SecretString;

use crate::client::GkeClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`GkeClient`].
pub struct GkeClientBuilder {
    base_url: Option<String>,
    access_token: Option<SecretString>,
    timeout: Duration,
}

impl Default for GkeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            access_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GkeClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `https://container.googleapis.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the OAuth 2.0 access token sent as a bearer token.
    pub fn access_token(mut self, token: SecretString) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.access_token = Some(config.auth.access_token.clone());
        self.timeout = config.connection.timeout;
        self
    }

    /// Build the [`GkeClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::MissingAccessToken`] if no token was provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<GkeClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is empty".to_string()));
        }

        let access_token = self
            .access_token
            .ok_or(ClientError::MissingAccessToken)?;

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(GkeClient {
            http,
            base_url,
            access_token,
        })
    }
}
