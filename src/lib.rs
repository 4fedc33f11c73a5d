//! pm-reconcile - Phenotype plate substrate reconciliation
//!
//! Resolves substrate labels from a phenotype microarray plate map to
//! metabolites of a genome-scale metabolic model and to the exchange
//! reaction that feeds each metabolite from the environment.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Plate grid (CSV cells)  ──►  plate::extract_substrates          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │ labels
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Reconciler (per label)                        │
//! │  normalize ─► CandidateResolver ─► locate ─► find_exchange       │
//! │                   │ CompoundSearch     │ MetabolicModel          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │ OutcomeRecord per label
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 report::write_csv (UTF-8 + BOM)                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use pm_reconcile::{BiggClient, InMemoryModel, ReconcileConfig, Reconciler};
//!
//! let config = ReconcileConfig::from_file("config/reconcile.yaml")?;
//! let model = InMemoryModel::from_json_file("iJO1366.json")?;
//! let search = BiggClient::new(&config.search)?;
//!
//! let reconciler = Reconciler::new(&config, &search, &model);
//! let records = reconciler.reconcile(&labels).await;
//! pm_reconcile::report::write_csv(&records, "pm1_mapping_results.csv")?;
//! ```

pub mod config;
pub mod model;
pub mod plate;
pub mod report;
pub mod resolution;
pub mod search;

// Re-export main types
pub use config::{CompartmentConfig, ConfigError, ReconcileConfig, SearchConfig, TieBreak};
pub use model::{InMemoryModel, MetabolicModel, Metabolite, ModelError, Reaction};
pub use plate::{extract_substrates, PlateError, PlateGrid};
pub use report::{ReportError, StatusSummary};
pub use resolution::{
    normalize, CandidateResolver, OutcomeRecord, Reconciler, ResolutionStatus,
};
pub use search::{BiggClient, CandidateRecord, CompoundSearch, SearchError};
