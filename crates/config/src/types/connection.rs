//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (base URL, request timeout).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Invariants:
//! - `base_url` is normalized (validated http(s), no trailing slash) by the loader.

use crate::types::auth::AuthConfig;
use std::time::Duration;

/// Connection configuration for the GKE control-plane API.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the API (e.g., https://container.googleapis.com)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}
