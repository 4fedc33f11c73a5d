//! Reconciliation configuration
//!
//! Loads the run configuration from YAML. Every field has a default, so an
//! empty document (or no file at all) reproduces the E. coli / BiGG setup
//! used for the PM1 plate.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration file used when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "config/reconcile.yaml";

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Root configuration for a reconciliation run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Organism tag a candidate must carry (compared case-insensitively)
    pub organism: String,
    /// Organism tag marking an organism-agnostic candidate
    pub wildcard_organism: String,
    /// Entity type passed to the search service
    pub entity_type: String,
    /// Pick among several candidates when none matches the key exactly
    pub tie_break: TieBreak,
    pub compartments: CompartmentConfig,
    /// Reaction id prefix marking exchange reactions
    pub exchange_prefix: String,
    pub search: SearchConfig,
}

/// Tie-break policy for ambiguous candidate sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// First candidate in service return order
    #[default]
    First,
    /// Lowest identifier in byte order
    Alphabetical,
}

/// Compartment suffix heuristic
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompartmentConfig {
    /// Suffix appended to identifiers without a recognized compartment
    pub default: String,
    /// Suffixes accepted as already compartment-qualified
    pub recognized: Vec<String>,
}

/// Compound search service settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub base_url: String,
    /// Minimum spacing between requests
    pub rate_limit_ms: u64,
    pub timeout_secs: u64,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            organism: "escherichia_coli".to_string(),
            wildcard_organism: "/".to_string(),
            entity_type: "metabolites".to_string(),
            tie_break: TieBreak::First,
            compartments: CompartmentConfig::default(),
            exchange_prefix: "EX_".to_string(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for CompartmentConfig {
    fn default() -> Self {
        Self {
            default: "e".to_string(),
            recognized: vec!["e".to_string(), "c".to_string(), "p".to_string()],
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://bigg.ucsd.edu/api/v2".to_string(),
            rate_limit_ms: 200,
            timeout_secs: 30,
        }
    }
}

impl CompartmentConfig {
    /// True if `id` already ends with `_<suffix>` for a recognized suffix
    pub fn is_qualified(&self, id: &str) -> bool {
        self.recognized.iter().any(|suffix| {
            id.strip_suffix(suffix.as_str())
                .is_some_and(|rest| rest.ends_with('_'))
        })
    }

    /// Qualify a base identifier with the default compartment
    pub fn qualify(&self, id: &str) -> String {
        format!("{}_{}", id, self.default)
    }
}

impl ReconcileConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load the configuration for a run
    ///
    /// An explicit path must exist. Without one, `fallback` is used when
    /// present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>, fallback: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let fallback = fallback.as_ref();
        match explicit {
            Some(path) => Self::from_file(path),
            None if fallback.is_file() => Self::from_file(fallback),
            None => {
                tracing::debug!(path = %fallback.display(), "No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document, treat it as all defaults
        let config: ReconcileConfig = if content.trim().is_empty() {
            ReconcileConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.organism.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "organism",
                reason: "must not be empty".to_string(),
            });
        }
        if self.exchange_prefix.is_empty() {
            return Err(ConfigError::Invalid {
                field: "exchange_prefix",
                reason: "must not be empty".to_string(),
            });
        }
        if self.compartments.default.chars().count() != 1 {
            return Err(ConfigError::Invalid {
                field: "compartments.default",
                reason: format!(
                    "expected a one-letter compartment, got '{}'",
                    self.compartments.default
                ),
            });
        }
        if let Some(bad) = self
            .compartments
            .recognized
            .iter()
            .find(|c| c.chars().count() != 1)
        {
            return Err(ConfigError::Invalid {
                field: "compartments.recognized",
                reason: format!("expected one-letter compartments, got '{}'", bad),
            });
        }
        if self.search.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "search.timeout_secs",
                reason: "must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }
}
