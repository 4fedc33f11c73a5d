//! BiGG Models API response types
//!
//! Reference: http://bigg.ucsd.edu/data_access (`/api/v2/search`)

use serde::Deserialize;

use super::traits::CandidateRecord;

/// Top-level search response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct BiggSearchResponse {
    #[serde(default)]
    pub results: Vec<BiggSearchHit>,
    #[serde(default)]
    pub results_count: Option<usize>,
}

/// One row of a metabolite search
#[derive(Debug, Clone, Deserialize)]
pub struct BiggSearchHit {
    pub bigg_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model_bigg_id: Option<String>,
    /// Missing on universal entries, treated as empty
    #[serde(default)]
    pub organism: Option<String>,
}

impl From<BiggSearchHit> for CandidateRecord {
    fn from(hit: BiggSearchHit) -> Self {
        CandidateRecord {
            bigg_id: hit.bigg_id,
            organism: hit.organism.unwrap_or_default(),
            name: hit.name,
            model_bigg_id: hit.model_bigg_id,
        }
    }
}

impl BiggSearchResponse {
    pub fn into_candidates(self) -> Vec<CandidateRecord> {
        self.results.into_iter().map(CandidateRecord::from).collect()
    }
}
