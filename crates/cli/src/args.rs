//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Apply CLI overrides on top of the environment-derived configuration.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use gke_config::{ConfigError, ConfigLoader};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "gke-inventory")]
#[command(about = "GKE inventory - Export cluster and node pool details to CSV", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  gke-inventory report\n  gke-inventory --environment PROD report\n  gke-inventory --targets project/NON-PROD.json report --output-file inventory.csv\n  gke-inventory targets --json\n"
)]
pub struct Cli {
    /// Base URL of the GKE API (e.g., https://container.googleapis.com)
    #[arg(short, long, global = true, env = "GKE_API_BASE_URL")]
    pub base_url: Option<String>,

    /// OAuth access token sent as a bearer token
    #[arg(short, long, global = true, env = "GKE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "GKE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Environment name (selects the default targets file and report name)
    #[arg(short, long, global = true, env = "GKE_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Path to the JSON targets file (default: project/<ENVIRONMENT>.json)
    #[arg(short, long, global = true, env = "GKE_TARGETS_PATH", value_name = "FILE")]
    pub targets: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every target and write the CSV inventory
    Report {
        /// Report file path (default: output/Asset List GKE <ENVIRONMENT>.csv)
        #[arg(short, long, value_name = "FILE")]
        output_file: Option<PathBuf>,
    },

    /// List the configured targets and their resource names without calling the API
    Targets {
        /// Print the targets as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Layer environment variables and then CLI flags over the defaults.
    ///
    /// Blank flag values count as unset, matching the environment layer, so a
    /// whitespace-only `GKE_ACCESS_TOKEN` still falls back to the OAuth token.
    pub fn config_loader(&self) -> Result<ConfigLoader, ConfigError> {
        let mut loader = ConfigLoader::new().from_env()?;

        if let Some(url) = non_blank(self.base_url.as_deref()) {
            loader = loader.with_base_url(url);
        }
        if let Some(token) = non_blank(self.access_token.as_deref()) {
            loader = loader.with_access_token(token);
        }
        if let Some(timeout_secs) = self.timeout {
            loader = loader.with_timeout(Duration::from_secs(timeout_secs));
        }
        if let Some(environment) = non_blank(self.environment.as_deref()) {
            loader = loader.with_environment(environment);
        }
        if let Some(path) = non_blank_path(self.targets.as_deref()) {
            loader = loader.with_targets_path(path);
        }
        if let Commands::Report { output_file } = &self.command
            && let Some(path) = non_blank_path(output_file.as_deref())
        {
            loader = loader.with_output_path(path);
        }

        Ok(loader)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn non_blank_path(path: Option<&Path>) -> Option<PathBuf> {
    path.filter(|p| !p.to_string_lossy().trim().is_empty())
        .map(Path::to_path_buf)
}
