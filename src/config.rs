//! YAML Configuration File Support for Larder
//!
//! All stage configurations (canonical, ingest, matcher) can live in one YAML
//! document that is loaded at startup. Every section and every field is
//! optional; anything left out takes the stage's default.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # Larder Configuration
//! version: "1.0"
//! name: "kitchen"
//!
//! canonical:
//!   version: 1
//!   normalize_unicode: true
//!   collapse_whitespace: true
//!   strip_punctuation: false
//!
//! ingest:
//!   version: 1
//!   recipe_id_namespace: "6ba7b812-9dad-11d1-80b4-00c04fd430c8"
//!   strip_control_chars: true
//!   max_ingredients: 40
//!
//! matcher:
//!   version: 1
//!   mode: "streaming"
//!   limit: 50
//!   fetch_limit: 30
//!   fetch_timeout_ms: 2000
//! ```

use std::fs;
use std::path::Path;

use canonical::NormalizeConfig;
use ingest::IngestConfig;
use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the whole search pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LarderConfig {
    /// Configuration format version
    #[serde(default = "default_format_version")]
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Ingredient normalization, shared by inventories and recipes
    #[serde(default)]
    pub canonical: NormalizeConfig,

    /// Recipe row ingest
    #[serde(default)]
    pub ingest: IngestConfig,

    /// Matching and ranking
    #[serde(default)]
    pub matcher: MatchConfig,
}

impl LarderConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: LarderConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the format version and every section.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("canonical: {e}")))?;
        self.ingest
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("ingest: {e}")))?;
        self.matcher
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("matcher: {e}")))?;

        Ok(())
    }
}

impl Default for LarderConfig {
    fn default() -> Self {
        Self {
            version: default_format_version(),
            name: None,
            canonical: NormalizeConfig::default(),
            ingest: IngestConfig::default(),
            matcher: MatchConfig::default(),
        }
    }
}

fn default_format_version() -> String {
    "1.0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcher::RankMode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
canonical:
  collapse_whitespace: true
matcher:
  mode: "streaming"
  limit: 5
"#;

        let config = LarderConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert!(config.canonical.collapse_whitespace);
        assert!(!config.canonical.normalize_unicode);
        assert_eq!(config.matcher.mode, RankMode::Streaming);
        assert_eq!(config.matcher.limit, 5);
        assert_eq!(config.matcher.fetch_limit, Some(30));
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
ingest:
  max_ingredients: 12
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = LarderConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1");
        assert_eq!(config.ingest.max_ingredients, Some(12));
    }

    #[test]
    fn test_missing_file() {
        let result = LarderConfig::from_file("/definitely/not/here/larder.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_default_config() {
        let config = LarderConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = LarderConfig::from_yaml("{}").unwrap();
        assert_eq!(config, LarderConfig::default());
    }

    #[test]
    fn test_unsupported_version() {
        let result = LarderConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(result, Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"));
    }

    #[test]
    fn test_matcher_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  mode: "streaming"
  limit: 0
"#;

        let result = LarderConfig::from_yaml(yaml);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("matcher"));
        assert!(err.contains("limit"));
    }

    #[test]
    fn test_canonical_validation() {
        let yaml = r#"
version: "1.0"
canonical:
  version: 0
"#;

        let result = LarderConfig::from_yaml(yaml);
        assert!(
            matches!(result, Err(ConfigLoadError::Validation(msg)) if msg.starts_with("canonical"))
        );
    }

    #[test]
    fn test_ingest_validation() {
        let yaml = r#"
version: "1.0"
ingest:
  max_ingredients: 0
"#;

        let result = LarderConfig::from_yaml(yaml);
        assert!(
            matches!(result, Err(ConfigLoadError::Validation(msg)) if msg.starts_with("ingest"))
        );
    }

    #[test]
    fn test_bad_mode_is_a_parse_error() {
        let yaml = r#"
version: "1.0"
matcher:
  mode: "fuzzy"
"#;

        assert!(matches!(
            LarderConfig::from_yaml(yaml),
            Err(ConfigLoadError::YamlParse(_))
        ));
    }

    #[test]
    fn test_full_yaml_roundtrip() {
        let yaml = r#"
version: "1.0"
name: "production"
canonical:
  version: 1
  normalize_unicode: true
  collapse_whitespace: true
  strip_punctuation: true

ingest:
  version: 1
  recipe_id_namespace: "6ba7b812-9dad-11d1-80b4-00c04fd430c8"
  strip_control_chars: false
  max_ingredients: 40

matcher:
  version: 1
  mode: "batch"
  limit: 20
  fetch_limit: 100
  fetch_timeout_ms: 1500
"#;

        let config = LarderConfig::from_yaml(yaml).unwrap();

        assert!(config.canonical.strip_punctuation);
        assert!(!config.ingest.strip_control_chars);
        assert_eq!(config.ingest.max_ingredients, Some(40));
        assert_eq!(
            config.ingest.recipe_id_namespace.to_string(),
            "6ba7b812-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(config.matcher.mode, RankMode::Batch);
        assert_eq!(config.matcher.fetch_limit, Some(100));
        assert_eq!(config.matcher.fetch_timeout_ms, Some(1500));

        let reparsed = LarderConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(reparsed, config);
    }
}
