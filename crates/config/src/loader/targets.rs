//! Targets file loading.
//!
//! Invariants:
//! - The whole file is read and parsed before any remote call is made.
//! - Target order is preserved exactly as written.
//! - Unreadable or malformed files are fatal; nothing is recovered.

use std::path::Path;

use tracing::debug;

use super::error::ConfigError;
use crate::types::FetchTarget;

/// Read the ordered list of fetch targets from a JSON array file.
pub fn load_targets(path: &Path) -> Result<Vec<FetchTarget>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::TargetsFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let targets: Vec<FetchTarget> =
        serde_json::from_str(&content).map_err(|source| ConfigError::TargetsFileParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), count = targets.len(), "Loaded fetch targets");
    Ok(targets)
}
