//! Base identifier to model metabolite
//!
//! Plate assays feed compounds from outside the cell, so an identifier
//! without a compartment suffix is qualified with the default compartment
//! (`_e`). Identifiers that already carry a recognized suffix are used as-is.

use crate::config::CompartmentConfig;
use crate::model::{MetabolicModel, Metabolite};

use super::ResolutionStatus;

/// The compartment-qualified id `identifier` is looked up under
pub fn qualified_id(identifier: &str, compartments: &CompartmentConfig) -> String {
    if compartments.is_qualified(identifier) {
        identifier.to_string()
    } else {
        compartments.qualify(identifier)
    }
}

/// Find the model metabolite for a resolved base identifier
pub fn locate<'m>(
    identifier: &str,
    model: &'m dyn MetabolicModel,
    compartments: &CompartmentConfig,
) -> Result<&'m Metabolite, ResolutionStatus> {
    let met_id = qualified_id(identifier, compartments);
    model.get_metabolite(&met_id).ok_or_else(|| {
        tracing::debug!(identifier, metabolite = %met_id, "Metabolite not in model");
        ResolutionStatus::MetaboliteMissing
    })
}
