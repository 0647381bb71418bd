//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration layering (see `Cli::config_loader`).

use anyhow::Result;
use gke_config::ConfigLoader;

use crate::args::Commands;
use crate::commands;

pub(crate) async fn run_command(command: &Commands, loader: &ConfigLoader) -> Result<()> {
    match command {
        Commands::Report { .. } => commands::report::run(loader).await?,
        Commands::Targets { json } => commands::targets::run(loader, *json)?,
    }

    Ok(())
}
