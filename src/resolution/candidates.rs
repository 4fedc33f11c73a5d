//! Candidate filtering and disambiguation
//!
//! Candidates are kept only when their organism tag matches the target
//! organism or the organism-agnostic wildcard. Among the survivors:
//! - none  -> `not found`
//! - one   -> that candidate
//! - many  -> first exact (case-insensitive) id match on the key, else the
//!   tie-break policy (service order by default)

use crate::config::{ReconcileConfig, TieBreak};
use crate::search::{CandidateRecord, CompoundSearch};

use super::ResolutionStatus;

/// Pick the candidate for `key` from a raw search result
///
/// `organism` and `wildcard` are compared case-insensitively.
pub fn select_candidate<'c>(
    candidates: &'c [CandidateRecord],
    key: &str,
    organism: &str,
    wildcard: &str,
    tie_break: TieBreak,
) -> Option<&'c CandidateRecord> {
    let organism = organism.to_lowercase();
    let wildcard = wildcard.to_lowercase();

    let filtered: Vec<&CandidateRecord> = candidates
        .iter()
        .filter(|c| {
            let tag = c.organism.to_lowercase();
            tag == organism || tag == wildcard
        })
        .collect();

    match filtered.as_slice() {
        [] => None,
        [only] => Some(*only),
        many => {
            let key = key.to_lowercase();
            if let Some(exact) = many.iter().find(|c| c.bigg_id.to_lowercase() == key) {
                return Some(*exact);
            }
            match tie_break {
                TieBreak::First => many.first().copied(),
                TieBreak::Alphabetical => many
                    .iter()
                    .copied()
                    .min_by(|a, b| a.bigg_id.cmp(&b.bigg_id)),
            }
        }
    }
}

/// Resolves normalized keys to base identifiers through the search service
pub struct CandidateResolver<'a> {
    search: &'a dyn CompoundSearch,
    organism: String,
    wildcard: String,
    entity_type: String,
    tie_break: TieBreak,
}

impl<'a> CandidateResolver<'a> {
    pub fn new(config: &ReconcileConfig, search: &'a dyn CompoundSearch) -> Self {
        Self {
            search,
            organism: config.organism.clone(),
            wildcard: config.wildcard_organism.clone(),
            entity_type: config.entity_type.clone(),
            tie_break: config.tie_break,
        }
    }

    /// Resolve `key` to a base identifier
    ///
    /// A failing search call becomes `SearchFailed` for this key only.
    pub async fn resolve(&self, key: &str) -> Result<String, ResolutionStatus> {
        let candidates = self
            .search
            .search(key, &self.entity_type)
            .await
            .map_err(|e| ResolutionStatus::SearchFailed(e.to_string()))?;

        let hit = select_candidate(
            &candidates,
            key,
            &self.organism,
            &self.wildcard,
            self.tie_break,
        )
        .ok_or(ResolutionStatus::NotFound)?;

        tracing::debug!(
            key,
            candidates = candidates.len(),
            bigg_id = %hit.bigg_id,
            organism = %hit.organism,
            "Candidate selected"
        );

        Ok(hit.bigg_id.clone())
    }
}
