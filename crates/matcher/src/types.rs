use std::time::Duration;

use canonical::{CanonicalError, IngredientToken};
use ingest::{IngestError, RecipeCandidate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::source::SourceError;

/// How scored records are ordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// Materialize every scored record, then stable-sort with
    /// [`batch_order`](crate::batch_order).
    #[default]
    Batch,
    /// Keep only the best `limit` records while scoring, ordered with
    /// [`streaming_order`](crate::streaming_order).
    Streaming,
}

/// Configuration for matching and ranking.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Configuration schema version.
    #[serde(default = "MatchConfig::default_version")]
    pub version: u32,
    /// Batch or streaming ranking.
    #[serde(default)]
    pub mode: RankMode,
    /// Leaderboard size in streaming mode.
    #[serde(default = "MatchConfig::default_limit")]
    pub limit: usize,
    /// Maximum number of candidates requested from the candidate source.
    /// `None` asks for everything that matches.
    #[serde(default = "MatchConfig::default_fetch_limit")]
    pub fetch_limit: Option<usize>,
    /// Give up on the candidate fetch after this many milliseconds.
    #[serde(default)]
    pub fetch_timeout_ms: Option<u64>,
}

impl MatchConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_limit() -> usize {
        crate::leaderboard::DEFAULT_LIMIT
    }

    pub(crate) fn default_fetch_limit() -> Option<usize> {
        Some(30)
    }

    /// Streaming configuration with the given leaderboard size.
    pub fn streaming(limit: usize) -> Self {
        Self {
            mode: RankMode::Streaming,
            limit,
            ..Self::default()
        }
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_ms.map(Duration::from_millis)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "config.version must be >= 1".into(),
            ));
        }
        if self.mode == RankMode::Streaming && self.limit == 0 {
            return Err(MatchError::InvalidConfig(
                "limit must be greater than zero in streaming mode".into(),
            ));
        }
        if self.fetch_limit == Some(0) {
            return Err(MatchError::InvalidConfig(
                "fetch_limit must be greater than zero when set".into(),
            ));
        }
        if self.fetch_timeout_ms == Some(0) {
            return Err(MatchError::InvalidConfig(
                "fetch_timeout_ms must be greater than zero when set".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            mode: RankMode::Batch,
            limit: Self::default_limit(),
            fetch_limit: Self::default_fetch_limit(),
            fetch_timeout_ms: None,
        }
    }
}

/// The outcome of scoring one recipe against one inventory.
///
/// Invariants, established by [`score`](crate::score):
///
/// - `match_count + extra_user.len()` equals the number of user tokens.
/// - every entry of `missing_ingredients` is a normalized ingredient of
///   `candidate`.
/// - `perfect == (missing_count == 0 && match_count > 0)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub candidate: RecipeCandidate,
    /// User tokens found in the recipe, in inventory order.
    pub matched_user: Vec<IngredientToken>,
    /// User tokens the recipe does not use, in inventory order.
    pub extra_user: Vec<IngredientToken>,
    /// Recipe ingredients no user token covers, in recipe order.
    pub missing_ingredients: Vec<IngredientToken>,
    pub match_count: usize,
    pub missing_count: usize,
    pub perfect: bool,
    /// Number of non-blank recipe ingredients after normalization.
    pub ingredient_count: usize,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// The inventory (or other request input) failed validation. No
    /// candidates were fetched.
    #[error("validation error: {0}")]
    Validation(#[from] IngestError),
    /// The candidate source failed.
    #[error("candidate source error: {0}")]
    DataSource(#[from] SourceError),
    /// The candidate source did not answer in time.
    #[error("candidate fetch timed out after {0:?}")]
    Timeout(Duration),
}

impl MatchError {
    /// True for failures of the external candidate fetch, timeouts included.
    pub fn is_data_source(&self) -> bool {
        matches!(self, MatchError::DataSource(_) | MatchError::Timeout(_))
    }
}

impl From<CanonicalError> for MatchError {
    fn from(err: CanonicalError) -> Self {
        MatchError::InvalidConfig(err.to_string())
    }
}
