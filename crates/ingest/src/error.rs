//! Error types produced by the ingest crate.
//!
//! | Error | Description |
//! |-------|-------------|
//! | [`EmptyInventory`](IngestError::EmptyInventory) | Produce + pantry hold no usable ingredient |
//! | [`InvalidRecipe`](IngestError::InvalidRecipe) | A recipe row cannot be identified |
//! | [`UnknownMealType`](IngestError::UnknownMealType) | A meal-type name outside breakfast/lunch/dinner/snack |
//! | [`Json`](IngestError::Json) | A JSON document could not be parsed |
//!
//! A recipe with a missing or null ingredient list is *not* an error: it
//! ingests with an empty list.
//!
//! ```rust
//! use ingest::{IngestError, UserInventory};
//! use canonical::NormalizeConfig;
//!
//! let inventory = UserInventory::new(Vec::<String>::new(), vec!["   ".to_string()]);
//! match inventory.tokens(&NormalizeConfig::default()) {
//!     Err(IngestError::EmptyInventory) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
use thiserror::Error;

/// Errors that can occur while validating inventories and recipe rows.
///
/// All variants are cloneable and comparable so tests and callers can match
/// on them precisely. The enum is `#[non_exhaustive]`; include a catch-all
/// arm when matching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IngestError {
    /// The merged user inventory is empty once normalized and blank entries
    /// are removed. No search can be run against it.
    #[error("inventory is empty: add at least one produce or pantry ingredient")]
    EmptyInventory,

    /// A recipe row is unusable (for example it has neither an id nor a
    /// title to derive one from).
    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),

    /// A meal-type name that is not one of breakfast, lunch, dinner, snack.
    #[error("unknown meal type: {0:?}")]
    UnknownMealType(String),

    /// A JSON document failed to parse.
    #[error("invalid json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::Json(err.to_string())
    }
}
