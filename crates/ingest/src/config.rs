//! Configuration types for recipe ingest.
//!
//! [`IngestConfig`] controls how raw recipe rows are sanitized and how
//! missing recipe ids are derived. It is cheap to clone and deserializes from
//! JSON or YAML with defaults for every field.
//!
//! ```rust
//! use ingest::IngestConfig;
//!
//! let config = IngestConfig::default();
//! config.validate().expect("default config is valid");
//! assert!(config.strip_control_chars);
//! assert!(config.max_ingredients.is_none());
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Runtime configuration for recipe ingest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IngestConfig {
    /// Version of the ingest rules. Must be >= 1.
    pub version: u32,

    /// Namespace for deterministic UUIDv5 recipe ids.
    ///
    /// Rows without an id get `UUIDv5(namespace, title)`, so the same title
    /// always maps to the same id.
    pub recipe_id_namespace: Uuid,

    /// Strip control characters from ids, titles and ingredient strings.
    pub strip_control_chars: bool,

    /// Keep at most this many ingredients per recipe. `None` keeps all.
    pub max_ingredients: Option<usize>,
}

/// Invalid ingest configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("ingest config version must be >= 1")]
    ZeroVersion,
    #[error("max_ingredients must be greater than zero when set")]
    ZeroMaxIngredients,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            version: 1,
            recipe_id_namespace: Uuid::NAMESPACE_OID,
            strip_control_chars: true,
            max_ingredients: None,
        }
    }
}

impl IngestConfig {
    /// Validate the configuration. Call once at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 {
            return Err(ConfigError::ZeroVersion);
        }
        if self.max_ingredients == Some(0) {
            return Err(ConfigError::ZeroMaxIngredients);
        }
        Ok(())
    }
}
