//! Substrate name resolution pipeline
//!
//! Each stage returns `Result<_, ResolutionStatus>`; the driver stops at
//! the first `Err` and records it as the row's status. Nothing in here
//! aborts a batch.
//!
//! ```text
//! label ─► normalize ─► CandidateResolver ─► locate ─► find_exchange
//!             key          base id           met id      EX_ id
//! ```

pub mod candidates;
pub mod driver;
pub mod exchange;
pub mod locate;
pub mod normalize;

use std::fmt;

pub use candidates::{select_candidate, CandidateResolver};
pub use driver::Reconciler;
pub use exchange::find_exchange;
pub use locate::locate;
pub use normalize::normalize;

/// Terminal status of a record whose resolution did not complete
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolutionStatus {
    /// The search collaborator failed; carries the cause
    SearchFailed(String),
    /// No candidate for the target organism
    NotFound,
    /// Compartment-qualified id absent from the model
    MetaboliteMissing,
    /// Metabolite has no exchange reaction
    ExchangeMissing,
}

impl ResolutionStatus {
    /// Status without its cause, for tallies
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SearchFailed(_) => "search failed",
            Self::NotFound => "not found",
            Self::MetaboliteMissing => "metabolite missing",
            Self::ExchangeMissing => "exchange missing",
        }
    }
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchFailed(cause) => write!(f, "search failed: {}", cause),
            other => f.write_str(other.kind()),
        }
    }
}

/// One reconciliation row per input label
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeRecord {
    pub original_name: String,
    pub normalized_key: String,
    pub resolved_identifier: Option<String>,
    pub metabolite_reference: Option<String>,
    /// Exchange reaction id, or where resolution stopped
    pub exchange: Result<String, ResolutionStatus>,
}

impl OutcomeRecord {
    pub fn is_resolved(&self) -> bool {
        self.exchange.is_ok()
    }

    pub fn status(&self) -> Option<&ResolutionStatus> {
        self.exchange.as_ref().err()
    }

    /// The report's last column
    pub fn exchange_or_status(&self) -> String {
        match &self.exchange {
            Ok(reaction) => reaction.clone(),
            Err(status) => status.to_string(),
        }
    }
}
