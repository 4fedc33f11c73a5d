//! Reconciliation driver
//!
//! Runs normalize -> resolve -> locate -> find_exchange for each label in
//! order, one label at a time. Every label yields exactly one record; a
//! failed stage ends that record with its status and the batch moves on.

use crate::config::{CompartmentConfig, ReconcileConfig};
use crate::model::MetabolicModel;
use crate::plate::cell_substrate;
use crate::search::CompoundSearch;

use super::candidates::CandidateResolver;
use super::exchange::find_exchange;
use super::locate::locate;
use super::normalize::normalize;
use super::{OutcomeRecord, ResolutionStatus};

pub struct Reconciler<'a> {
    resolver: CandidateResolver<'a>,
    model: &'a dyn MetabolicModel,
    compartments: CompartmentConfig,
    exchange_prefix: String,
}

impl<'a> Reconciler<'a> {
    pub fn new(
        config: &ReconcileConfig,
        search: &'a dyn CompoundSearch,
        model: &'a dyn MetabolicModel,
    ) -> Self {
        Self {
            resolver: CandidateResolver::new(config, search),
            model,
            compartments: config.compartments.clone(),
            exchange_prefix: config.exchange_prefix.clone(),
        }
    }

    /// Reconcile every label, preserving input order
    pub async fn reconcile<S: AsRef<str>>(&self, labels: &[S]) -> Vec<OutcomeRecord> {
        tracing::info!(labels = labels.len(), "Reconciling substrates");

        let mut records = Vec::with_capacity(labels.len());
        for (idx, label) in labels.iter().enumerate() {
            let record = self.reconcile_one(label.as_ref()).await;
            match record.status() {
                None => tracing::debug!(
                    index = idx,
                    name = %record.original_name,
                    exchange = %record.exchange_or_status(),
                    "Substrate resolved"
                ),
                Some(status) => tracing::warn!(
                    index = idx,
                    name = %record.original_name,
                    key = %record.normalized_key,
                    %status,
                    "Substrate unresolved"
                ),
            }
            records.push(record);
        }

        let resolved = records.iter().filter(|r| r.is_resolved()).count();
        tracing::info!(
            total = records.len(),
            resolved,
            unresolved = records.len() - resolved,
            "Reconciliation complete"
        );

        records
    }

    /// Reconcile a single label
    ///
    /// The label may still carry its well coordinate (`"A1\nD-Glucose"`);
    /// only the compound name is kept.
    pub async fn reconcile_one(&self, label: &str) -> OutcomeRecord {
        let original_name = cell_substrate(label);
        let normalized_key = normalize(&original_name);

        let mut resolved_identifier = None;
        let mut metabolite_reference = None;
        let exchange = self
            .run_stages(
                &normalized_key,
                &mut resolved_identifier,
                &mut metabolite_reference,
            )
            .await;

        OutcomeRecord {
            original_name,
            normalized_key,
            resolved_identifier,
            metabolite_reference,
            exchange,
        }
    }

    /// Stages after normalization; fills in each field as it resolves
    async fn run_stages(
        &self,
        key: &str,
        resolved_identifier: &mut Option<String>,
        metabolite_reference: &mut Option<String>,
    ) -> Result<String, ResolutionStatus> {
        let base_id = self.resolver.resolve(key).await?;
        let base_id = resolved_identifier.insert(base_id);

        let metabolite = locate(base_id, self.model, &self.compartments)?;
        *metabolite_reference = Some(metabolite.id.clone());

        find_exchange(metabolite, &self.exchange_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InMemoryModel, Metabolite, Reaction};
    use crate::search::{CandidateRecord, SearchError};
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Search stub answering from a fixed key -> candidates table
    struct TableSearch {
        table: HashMap<String, Vec<CandidateRecord>>,
        failing: Vec<String>,
    }

    #[async_trait]
    impl CompoundSearch for TableSearch {
        async fn search(
            &self,
            query: &str,
            _entity_type: &str,
        ) -> Result<Vec<CandidateRecord>, SearchError> {
            if self.failing.iter().any(|q| q == query) {
                return Err(SearchError::Status { status: 503 });
            }
            Ok(self.table.get(query).cloned().unwrap_or_default())
        }
    }

    fn search() -> TableSearch {
        let mut table = HashMap::new();
        table.insert(
            "d_glucose".to_string(),
            vec![CandidateRecord::new("glc", "escherichia_coli")],
        );
        table.insert(
            "foo".to_string(),
            vec![CandidateRecord::new("foo", "/")],
        );
        table.insert(
            "atp".to_string(),
            vec![CandidateRecord::new("atp_c", "escherichia_coli")],
        );
        TableSearch {
            table,
            failing: vec!["glycerol".to_string()],
        }
    }

    fn model() -> InMemoryModel {
        let mut model = InMemoryModel::default();
        model.add_metabolite(Metabolite::new("glc_e")).unwrap();
        model.add_metabolite(Metabolite::new("atp_c")).unwrap();
        model
            .add_reaction(Reaction::new("EX_glc_e").with_metabolite("glc_e", -1.0))
            .unwrap();
        model
    }

    #[tokio::test]
    async fn test_one_record_per_label_in_order() {
        let config = ReconcileConfig::default();
        let search = search();
        let model = model();
        let reconciler = Reconciler::new(&config, &search, &model);

        let labels = ["A1\nD-Glucose", "Glycerol", "Foo", "Unknown Compound X", "ATP"];
        let records = reconciler.reconcile(&labels[..]).await;

        assert_eq!(records.len(), labels.len());
        let names: Vec<&str> = records.iter().map(|r| r.original_name.as_str()).collect();
        assert_eq!(names, vec!["D-Glucose", "Glycerol", "Foo", "Unknown Compound X", "ATP"]);

        let last_column: Vec<String> = records.iter().map(|r| r.exchange_or_status()).collect();
        assert_eq!(
            last_column,
            vec![
                "EX_glc_e",
                "search failed: Service returned HTTP 503",
                "metabolite missing",
                "not found",
                "exchange missing",
            ]
        );
    }

    #[tokio::test]
    async fn test_fields_carried_up_to_failure() {
        let config = ReconcileConfig::default();
        let search = search();
        let model = model();
        let reconciler = Reconciler::new(&config, &search, &model);

        let missing = reconciler.reconcile_one("Foo").await;
        assert_eq!(missing.resolved_identifier.as_deref(), Some("foo"));
        assert_eq!(missing.metabolite_reference, None);
        assert_eq!(missing.status(), Some(&ResolutionStatus::MetaboliteMissing));

        let no_exchange = reconciler.reconcile_one("ATP").await;
        assert_eq!(no_exchange.resolved_identifier.as_deref(), Some("atp_c"));
        assert_eq!(no_exchange.metabolite_reference.as_deref(), Some("atp_c"));
        assert_eq!(no_exchange.status(), Some(&ResolutionStatus::ExchangeMissing));

        let failed = reconciler.reconcile_one("Glycerol").await;
        assert_eq!(failed.normalized_key, "glycerol");
        assert_eq!(failed.resolved_identifier, None);
        assert!(matches!(failed.status(), Some(ResolutionStatus::SearchFailed(_))));
    }

    #[tokio::test]
    async fn test_empty_input() {
        let config = ReconcileConfig::default();
        let search = search();
        let model = model();
        let reconciler = Reconciler::new(&config, &search, &model);

        let labels: Vec<String> = Vec::new();
        assert!(reconciler.reconcile(&labels[..]).await.is_empty());
    }
}
