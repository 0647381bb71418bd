//! Centralized constants for the GKE inventory workspace.
//!
//! Default values used across crates live here to avoid magic number and
//! magic path duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default base URL of the GKE control-plane REST API.
pub const DEFAULT_BASE_URL: &str = "https://container.googleapis.com";

/// REST API version prefix appended to the base URL.
pub const API_VERSION: &str = "v1";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Report Defaults
// =============================================================================

/// Environment name used when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "NON-PROD";

/// Directory holding one targets file per environment (`<dir>/<ENV>.json`).
pub const DEFAULT_TARGETS_DIR: &str = "project";

/// Directory the CSV report is written to.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Report file name prefix; the environment name and `.csv` are appended.
pub const REPORT_NAME_PREFIX: &str = "Asset List GKE";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_BASE_URL: &str = "GKE_API_BASE_URL";
pub const ENV_ACCESS_TOKEN: &str = "GKE_ACCESS_TOKEN";
/// Fallback token variable, as exported by `gcloud auth print-access-token` wrappers.
pub const ENV_GOOGLE_ACCESS_TOKEN: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";
pub const ENV_TIMEOUT: &str = "GKE_TIMEOUT";
pub const ENV_ENVIRONMENT: &str = "GKE_ENVIRONMENT";
pub const ENV_TARGETS_PATH: &str = "GKE_TARGETS_PATH";
