//! Report input/output locations.

use std::path::PathBuf;

/// Where targets are read from and where the CSV report is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Environment name (e.g. `NON-PROD`), used for default file names.
    pub environment: String,
    /// JSON file listing the targets.
    pub targets_path: PathBuf,
    /// CSV file the report is written to.
    pub output_path: PathBuf,
}
