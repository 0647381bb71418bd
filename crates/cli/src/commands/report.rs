//! Report command implementation.

use anyhow::{Context, Result};
use gke_config::{ConfigLoader, load_targets};
use tracing::info;

use crate::inventory::{WriteOutcome, run_batch, write_report};

pub async fn run(loader: &ConfigLoader) -> Result<()> {
    let report_config = loader.build_report_config();
    let config = loader
        .build()
        .context("Failed to build configuration")?;
    let targets = load_targets(&report_config.targets_path).context("Failed to load targets")?;

    let client = crate::commands::build_client_from_config(&config)?;

    info!(
        environment = %report_config.environment,
        targets = targets.len(),
        "Connecting to {}",
        client.base_url()
    );

    let report = run_batch(&client, &targets, |target, outcome| {
        for line in outcome.notices(target) {
            println!("{line}");
        }
    })
    .await;

    match write_report(&report, &report_config.output_path)? {
        WriteOutcome::Written { path, rows } => {
            println!("Created Asset List for GKE {}", report_config.environment);
            eprintln!("Results written to {} ({} rows)", path.display(), rows);
        }
        WriteOutcome::Empty => println!("No details found to save."),
    }

    Ok(())
}
