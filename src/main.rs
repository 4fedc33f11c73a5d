//! pm-reconcile
//!
//! Reads a plate map grid, reconciles every substrate against a metabolic
//! model through the BiGG search API and writes the reconciliation table.
//!
//! Usage:
//!
//! ```bash
//! pm-reconcile --grid pm1_grid.csv --model iJO1366.json --output pm1_mapping_results.csv
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pm_reconcile::config::DEFAULT_CONFIG_PATH;
use pm_reconcile::{
    extract_substrates, report, BiggClient, InMemoryModel, PlateGrid, ReconcileConfig,
    Reconciler, StatusSummary,
};

#[derive(Parser)]
#[command(name = "pm-reconcile")]
#[command(about = "Map phenotype plate substrates to model exchange reactions")]
struct Cli {
    /// YAML configuration (falls back to config/reconcile.yaml, then built-in defaults)
    #[arg(long, env = "PM_RECONCILE_CONFIG")]
    config: Option<PathBuf>,

    /// Plate map page as a header-less CSV grid of cells
    #[arg(long)]
    grid: PathBuf,

    /// Metabolic model in COBRA JSON format
    #[arg(long)]
    model: PathBuf,

    /// Report destination
    #[arg(long, default_value = "pm1_mapping_results.csv")]
    output: PathBuf,

    /// Override the configured target organism
    #[arg(long)]
    organism: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pm_reconcile=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    tracing::info!(path = %config_path.display(), "Loading configuration");
    let mut config = ReconcileConfig::load(cli.config.as_deref(), DEFAULT_CONFIG_PATH)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;
    if let Some(organism) = cli.organism {
        config.organism = organism;
        config.validate().context("Invalid --organism")?;
    }

    let model = InMemoryModel::from_json_file(&cli.model)
        .with_context(|| format!("Failed to load model {}", cli.model.display()))?;
    tracing::info!(
        model = model.id.as_deref().unwrap_or("<unnamed>"),
        metabolites = model.metabolite_count(),
        reactions = model.reaction_count(),
        "Model loaded"
    );

    let grid = PlateGrid::from_csv_path(&cli.grid)
        .with_context(|| format!("Failed to load plate grid {}", cli.grid.display()))?;
    let substrates = extract_substrates(&grid);
    tracing::info!(substrates = substrates.len(), "Plate map extracted");

    let search = BiggClient::new(&config.search).context("Failed to create search client")?;
    tracing::info!(
        base_url = %search.base_url(),
        organism = %config.organism,
        "Resolving against compound search"
    );

    let reconciler = Reconciler::new(&config, &search, &model);
    let records = reconciler.reconcile(substrates.as_slice()).await;

    report::write_csv(&records, &cli.output)
        .with_context(|| format!("Failed to write report {}", cli.output.display()))?;

    let summary = StatusSummary::from_records(&records);
    tracing::info!(
        path = %cli.output.display(),
        total = summary.total,
        resolved = summary.resolved,
        "Report written"
    );
    for (status, count) in &summary.unresolved {
        tracing::info!(status, count, "Unresolved substrates");
    }

    Ok(())
}
