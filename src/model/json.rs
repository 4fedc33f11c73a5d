//! COBRA JSON model loading
//!
//! Reads the JSON layout written by COBRApy and served by BiGG
//! (`/static/models/<id>.json`). Only the fields the reconciler needs are
//! kept; bounds, genes and annotations are ignored.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use super::{InMemoryModel, Metabolite, ModelError, Reaction};

#[derive(Debug, Deserialize)]
struct JsonModelFile {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    metabolites: Vec<JsonMetabolite>,
    #[serde(default)]
    reactions: Vec<JsonReaction>,
}

#[derive(Debug, Deserialize)]
struct JsonMetabolite {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    compartment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JsonReaction {
    id: String,
    #[serde(default)]
    metabolites: IndexMap<String, f64>,
}

impl From<JsonMetabolite> for Metabolite {
    fn from(json: JsonMetabolite) -> Self {
        Metabolite {
            id: json.id,
            name: json.name,
            compartment: json.compartment,
            reactions: Vec::new(),
        }
    }
}

impl From<JsonReaction> for Reaction {
    fn from(json: JsonReaction) -> Self {
        Reaction {
            id: json.id,
            metabolites: json.metabolites,
        }
    }
}

impl InMemoryModel {
    /// Load a model from a COBRA JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Load a model from a COBRA JSON string
    pub fn from_json_str(content: &str) -> Result<Self, ModelError> {
        let file: JsonModelFile = serde_json::from_str(content)?;

        let mut model = InMemoryModel::new(file.id);
        for met in file.metabolites {
            model.add_metabolite(met.into())?;
        }
        for rxn in file.reactions {
            model.add_reaction(rxn.into())?;
        }

        tracing::debug!(
            model = model.id.as_deref().unwrap_or("<unnamed>"),
            metabolites = model.metabolite_count(),
            reactions = model.reaction_count(),
            "Model loaded"
        );

        Ok(model)
    }
}
