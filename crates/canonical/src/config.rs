//! Configuration for ingredient normalization.
//!
//! [`NormalizeConfig`] controls how raw ingredient strings become
//! [`IngredientToken`](crate::IngredientToken)s. The default configuration
//! lowercases and trims and does nothing else; every extra transform is
//! opt-in.
//!
//! # Versioning
//!
//! Any change to normalization behavior must be accompanied by a version
//! bump so that stored inventories and cached results can tell which rules
//! produced them. Version 0 is reserved and rejected.
//!
//! # Examples
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(!config.normalize_unicode);
//! assert!(!config.collapse_whitespace);
//! assert!(!config.strip_punctuation);
//!
//! let loose = NormalizeConfig {
//!     collapse_whitespace: true,
//!     strip_punctuation: true,
//!     ..Default::default()
//! };
//! assert!(loose.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the ingredient normalizer.
///
/// Serializes as:
///
/// ```json
/// {
///   "version": 1,
///   "normalize_unicode": false,
///   "collapse_whitespace": false,
///   "strip_punctuation": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Version of the normalization rules. Must be >= 1.
    pub version: u32,

    /// Apply Unicode NFKC normalization around case folding.
    ///
    /// Makes "Jalape\u{00F1}o" and "Jalapen\u{0303}o" compare equal.
    pub normalize_unicode: bool,

    /// Collapse interior whitespace runs to a single space.
    pub collapse_whitespace: bool,

    /// Replace Unicode punctuation with whitespace ("tomatoes, diced" becomes
    /// "tomatoes  diced", or "tomatoes diced" with `collapse_whitespace`).
    pub strip_punctuation: bool,
}

impl NormalizeConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: false,
            collapse_whitespace: false,
            strip_punctuation: false,
        }
    }
}
