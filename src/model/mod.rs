//! Read-only metabolic model store
//!
//! The resolution pipeline queries a model through `MetabolicModel` only.
//! `InMemoryModel` is the concrete store, loaded from the COBRA JSON
//! format (see `json`).

pub mod json;

use indexmap::IndexMap;
use thiserror::Error;

/// Errors raised while building or loading a model
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate metabolite id '{0}'")]
    DuplicateMetabolite(String),

    #[error("Duplicate reaction id '{0}'")]
    DuplicateReaction(String),

    #[error("Reaction '{reaction}' references unknown metabolite '{metabolite}'")]
    UnknownMetabolite {
        reaction: String,
        metabolite: String,
    },
}

/// A metabolite and the reactions it participates in
#[derive(Debug, Clone)]
pub struct Metabolite {
    /// Compartment-qualified identifier (e.g. `glc__D_e`)
    pub id: String,
    pub name: Option<String>,
    pub compartment: Option<String>,
    /// Participating reaction ids, in model enumeration order
    reactions: Vec<String>,
}

impl Metabolite {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            compartment: None,
            reactions: Vec::new(),
        }
    }

    pub fn reactions(&self) -> &[String] {
        &self.reactions
    }
}

/// A reaction with its stoichiometry
#[derive(Debug, Clone)]
pub struct Reaction {
    pub id: String,
    /// metabolite id -> coefficient, in declaration order
    pub metabolites: IndexMap<String, f64>,
}

impl Reaction {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metabolites: IndexMap::new(),
        }
    }

    pub fn with_metabolite(mut self, metabolite: impl Into<String>, coefficient: f64) -> Self {
        self.metabolites.insert(metabolite.into(), coefficient);
        self
    }
}

/// The model collaborator
///
/// Read-only for the whole run, shared by reference across labels.
pub trait MetabolicModel: Send + Sync {
    /// Look up a metabolite by its compartment-qualified id
    fn get_metabolite(&self, id: &str) -> Option<&Metabolite>;
}

/// Ordered in-memory model
#[derive(Debug, Clone, Default)]
pub struct InMemoryModel {
    pub id: Option<String>,
    metabolites: IndexMap<String, Metabolite>,
    reactions: IndexMap<String, Reaction>,
}

impl InMemoryModel {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn add_metabolite(&mut self, metabolite: Metabolite) -> Result<(), ModelError> {
        if self.metabolites.contains_key(&metabolite.id) {
            return Err(ModelError::DuplicateMetabolite(metabolite.id));
        }
        self.metabolites.insert(metabolite.id.clone(), metabolite);
        Ok(())
    }

    /// Add a reaction and register it on each participating metabolite
    ///
    /// All referenced metabolites must already be present.
    pub fn add_reaction(&mut self, reaction: Reaction) -> Result<(), ModelError> {
        if self.reactions.contains_key(&reaction.id) {
            return Err(ModelError::DuplicateReaction(reaction.id));
        }
        if let Some(missing) = reaction
            .metabolites
            .keys()
            .find(|id| !self.metabolites.contains_key(id.as_str()))
        {
            return Err(ModelError::UnknownMetabolite {
                reaction: reaction.id.clone(),
                metabolite: missing.clone(),
            });
        }

        for met_id in reaction.metabolites.keys() {
            if let Some(met) = self.metabolites.get_mut(met_id) {
                met.reactions.push(reaction.id.clone());
            }
        }
        self.reactions.insert(reaction.id.clone(), reaction);
        Ok(())
    }

    pub fn metabolite_count(&self) -> usize {
        self.metabolites.len()
    }

    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }
}

impl MetabolicModel for InMemoryModel {
    fn get_metabolite(&self, id: &str) -> Option<&Metabolite> {
        self.metabolites.get(id)
    }
}
