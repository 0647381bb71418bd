//! Configuration management for the GKE inventory reporter.
//!
//! This crate provides types and loaders for the control-plane connection
//! settings (environment variables, `.env`, CLI overrides) and for the list of
//! cluster/node-pool targets read from a JSON file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, load_targets};
pub use types::{AuthConfig, Config, ConnectionConfig, FetchTarget, ReportConfig};
