//! Core traits and types for the compound search abstraction
//!
//! The resolver only sees `CompoundSearch`, so the BiGG HTTP client and
//! the in-memory stubs used by tests are interchangeable.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single candidate returned by a compound search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Base identifier of the compound (no compartment)
    pub bigg_id: String,
    /// Organism tag, or the wildcard tag for organism-agnostic entries
    #[serde(default)]
    pub organism: String,
    /// Display name, diagnostics only
    #[serde(default)]
    pub name: Option<String>,
    /// Model the hit was found in, diagnostics only
    #[serde(default)]
    pub model_bigg_id: Option<String>,
}

impl CandidateRecord {
    pub fn new(bigg_id: impl Into<String>, organism: impl Into<String>) -> Self {
        Self {
            bigg_id: bigg_id.into(),
            organism: organism.into(),
            name: None,
            model_bigg_id: None,
        }
    }
}

/// The search collaborator
///
/// Implementations must be Send + Sync for use in async contexts.
#[async_trait]
pub trait CompoundSearch: Send + Sync {
    /// Look up candidates for `query` restricted to `entity_type`
    ///
    /// Returns candidates in service order; the order is significant for
    /// tie-breaking.
    async fn search(
        &self,
        query: &str,
        entity_type: &str,
    ) -> Result<Vec<CandidateRecord>, SearchError>;
}

/// Errors that can occur while talking to the search service
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Service returned HTTP {status}")]
    Status { status: u16 },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}
