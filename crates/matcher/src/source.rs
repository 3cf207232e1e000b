//! Candidate sources.
//!
//! The engine never talks to a datastore directly. It asks a
//! [`CandidateSource`] for recipes that contain at least one of the user's
//! ingredients and scores whatever comes back. Production deployments plug
//! in a database-backed implementation; [`InMemorySource`] serves tests,
//! benchmarks and small embedded catalogs.

use std::collections::HashSet;

use async_trait::async_trait;
use canonical::{normalize_list, IngredientToken, NormalizeConfig};
use ingest::{MealTypeFilter, RecipeCandidate};
use thiserror::Error;

/// What the engine asks a source for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateQuery {
    /// Normalized user tokens, deduplicated, first occurrence kept.
    pub tokens: Vec<IngredientToken>,
    /// Meal types to keep. Empty means no filtering.
    pub meal_types: MealTypeFilter,
    /// Maximum number of candidates to return. `None` returns all.
    pub limit: Option<usize>,
}

impl CandidateQuery {
    pub fn new(
        tokens: &[IngredientToken],
        meal_types: MealTypeFilter,
        limit: Option<usize>,
    ) -> Self {
        let mut seen = HashSet::with_capacity(tokens.len());
        let tokens = tokens
            .iter()
            .filter(|token| seen.insert(token.as_str()))
            .cloned()
            .collect();
        Self {
            tokens,
            meal_types,
            limit,
        }
    }
}

/// Failure reported by a candidate source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The backing store could not be reached.
    #[error("candidate source unavailable: {0}")]
    Unavailable(String),
    /// The store was reached but the query failed.
    #[error("candidate query failed: {0}")]
    Query(String),
}

/// Fetches recipes whose ingredient list shares at least one token with the
/// query, optionally restricted to some meal types.
///
/// Results are a superset of what will match; the engine does the precise
/// scoring. Implementations must not return partial results on error.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn fetch(&self, query: &CandidateQuery) -> Result<Vec<RecipeCandidate>, SourceError>;
}

/// A candidate source over an in-memory recipe list.
///
/// Selection mirrors a datastore `WHERE ingredients && $tokens` query: a
/// recipe qualifies when one of its normalized ingredients equals one of the
/// query tokens exactly. Results keep storage order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    recipes: Vec<RecipeCandidate>,
    normalize_cfg: NormalizeConfig,
}

impl InMemorySource {
    pub fn new(recipes: Vec<RecipeCandidate>) -> Self {
        Self {
            recipes,
            normalize_cfg: NormalizeConfig::default(),
        }
    }

    /// Use `cfg` when normalizing stored ingredients for selection. Should
    /// match the config used for the query tokens.
    pub fn with_normalize_config(mut self, cfg: NormalizeConfig) -> Self {
        self.normalize_cfg = cfg;
        self
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn recipes(&self) -> &[RecipeCandidate] {
        &self.recipes
    }

    /// Synchronous selection behind [`CandidateSource::fetch`].
    pub fn select(&self, query: &CandidateQuery) -> Vec<RecipeCandidate> {
        let wanted: HashSet<&str> = query.tokens.iter().map(IngredientToken::as_str).collect();
        let limit = query.limit.unwrap_or(usize::MAX);

        self.recipes
            .iter()
            .filter(|recipe| query.meal_types.accepts(recipe.meal_type))
            .filter(|recipe| {
                normalize_list(&recipe.ingredients, &self.normalize_cfg)
                    .iter()
                    .any(|token| wanted.contains(token.as_str()))
            })
            .take(limit)
            .cloned()
            .collect()
    }
}

impl FromIterator<RecipeCandidate> for InMemorySource {
    fn from_iter<T: IntoIterator<Item = RecipeCandidate>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl CandidateSource for InMemorySource {
    async fn fetch(&self, query: &CandidateQuery) -> Result<Vec<RecipeCandidate>, SourceError> {
        Ok(self.select(query))
    }
}
