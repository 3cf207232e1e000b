//! Workspace umbrella crate for Larder, the pantry-driven recipe finder.
//!
//! This crate stitches together ingredient normalization, recipe ingest and
//! matching so callers can go from a YAML config and an inventory to a ranked
//! recipe list with a single entry point.
//!
//! ```
//! use larder::{InMemorySource, LarderConfig, MealTypeFilter, Pipeline, RawRecipe, UserInventory};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let config = LarderConfig::from_yaml("version: \"1\"\nmatcher:\n  mode: streaming\n  limit: 5\n")?;
//! let pipeline = Pipeline::from_config(&config)?;
//!
//! let rows: Vec<RawRecipe> = serde_json::from_str(
//!     r#"[{"id": 1, "title": "Omelette", "ingredients": ["egg", "butter"]},
//!         {"title": "Pancakes", "ingredients": ["flour", "egg", "milk"]}]"#,
//! ).unwrap();
//! let source = pipeline.source_from_rows(rows);
//!
//! let inventory = UserInventory::new(["Eggs"], ["butter"]);
//! let records = pipeline.search(&source, &inventory, &MealTypeFilter::new()).await?;
//! assert_eq!(records[0].candidate.title, "Omelette");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! # }).unwrap();
//! ```

mod config;

pub use canonical::{
    CanonicalError, IngredientToken, NormalizeConfig, collapse_whitespace, normalize,
    normalize_list, normalize_with,
};
pub use config::{ConfigLoadError, LarderConfig};
pub use ingest::{
    ConfigError as IngestConfigError, IngestConfig, IngestError, InventorySnapshot, MealType,
    MealTypeFilter, MealTypeSelection, Nutrition, RawRecipe, RecipeCandidate, UserInventory,
    ingest_recipe, ingest_recipes, parse_recipes_json,
};
pub use matcher::{
    CandidateQuery, CandidateSource, DEFAULT_LIMIT, InMemorySource, Leaderboard, MatchConfig,
    MatchError, MatchMetrics, MatchRecord, Matcher, RankMode, SourceError, batch_order, insert,
    rank, score, score_with, set_match_metrics, streaming_order,
};

use std::error::Error;
use std::fmt;

use tracing::debug;

/// Errors that can occur while building or running the pipeline.
#[derive(Debug)]
pub enum PipelineError {
    Config(ConfigLoadError),
    Ingest(IngestError),
    Match(MatchError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Config(err) => write!(f, "configuration failure: {err}"),
            PipelineError::Ingest(err) => write!(f, "ingest failure: {err}"),
            PipelineError::Match(err) => write!(f, "search failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Config(err) => Some(err),
            PipelineError::Ingest(err) => Some(err),
            PipelineError::Match(err) => Some(err),
        }
    }
}

impl From<ConfigLoadError> for PipelineError {
    fn from(value: ConfigLoadError) -> Self {
        PipelineError::Config(value)
    }
}

impl From<IngestError> for PipelineError {
    fn from(value: IngestError) -> Self {
        PipelineError::Ingest(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        PipelineError::Match(value)
    }
}

/// A configured ingest + match pipeline.
///
/// Holds only configuration, so one instance can serve concurrent searches.
#[derive(Debug, Clone)]
pub struct Pipeline {
    ingest_cfg: IngestConfig,
    matcher: Matcher,
}

impl Pipeline {
    /// Build a pipeline from a loaded [`LarderConfig`], validating every
    /// section.
    pub fn from_config(cfg: &LarderConfig) -> Result<Self, PipelineError> {
        cfg.validate()?;
        let matcher = Matcher::new(cfg.matcher.clone(), cfg.canonical.clone())?;
        debug!(
            name = cfg.name.as_deref().unwrap_or("unnamed"),
            mode = ?cfg.matcher.mode,
            "pipeline_configured"
        );
        Ok(Self {
            ingest_cfg: cfg.ingest.clone(),
            matcher,
        })
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn ingest_config(&self) -> &IngestConfig {
        &self.ingest_cfg
    }

    /// Ingest raw datastore rows, skipping rows that cannot be identified.
    pub fn ingest_rows<I>(&self, rows: I) -> Vec<RecipeCandidate>
    where
        I: IntoIterator<Item = RawRecipe>,
    {
        ingest_recipes(rows, &self.ingest_cfg)
    }

    /// Ingest rows into an [`InMemorySource`] that normalizes with this
    /// pipeline's rules.
    pub fn source_from_rows<I>(&self, rows: I) -> InMemorySource
    where
        I: IntoIterator<Item = RawRecipe>,
    {
        InMemorySource::new(self.ingest_rows(rows))
            .with_normalize_config(self.matcher.normalize_config().clone())
    }

    /// Run one search against `source`.
    pub async fn search<S>(
        &self,
        source: &S,
        inventory: &UserInventory,
        filter: &MealTypeFilter,
    ) -> Result<Vec<MatchRecord>, PipelineError>
    where
        S: CandidateSource + ?Sized,
    {
        Ok(self.matcher.search(source, inventory, filter).await?)
    }

    /// Run one search for a saved inventory snapshot, using its meal-type
    /// selection as the filter.
    pub async fn search_snapshot<S>(
        &self,
        source: &S,
        snapshot: &InventorySnapshot,
    ) -> Result<Vec<MatchRecord>, PipelineError>
    where
        S: CandidateSource + ?Sized,
    {
        let filter = snapshot.meal_filter()?;
        self.search(source, &snapshot.inventory(), &filter).await
    }
}
