//! Exchange reaction lookup

use crate::model::Metabolite;

use super::ResolutionStatus;

/// First reaction of `metabolite` whose id starts with `prefix`
///
/// Reactions are scanned in model enumeration order. A well-formed model
/// has at most one exchange per metabolite, so first-found is taken.
pub fn find_exchange(metabolite: &Metabolite, prefix: &str) -> Result<String, ResolutionStatus> {
    metabolite
        .reactions()
        .iter()
        .find(|id| id.starts_with(prefix))
        .cloned()
        .ok_or(ResolutionStatus::ExchangeMissing)
}
