//! Larder Ingest Layer
//!
//! This is where user input and recipe rows enter the matcher. We take loose
//! data (form lists, datastore rows, saved JSON) and turn it into typed
//! values the scoring stage can rely on.
//!
//! ## What we do here
//!
//! - **Validate inventories** - produce + pantry are merged, normalized and
//!   rejected with [`IngestError::EmptyInventory`] when nothing usable is left.
//! - **Sanitize recipe rows** - null ingredient lists become empty, stray
//!   non-string entries are dropped, numeric strings become numbers.
//! - **Generate IDs** - rows without an id get a UUIDv5 derived from the
//!   title. Same title = same ID, every time.
//! - **Parse meal types** - breakfast, lunch, dinner, snack.
//! - **Log everything** - structured logs via tracing.
//!
//! ## Example
//!
//! ```
//! use ingest::{ingest_recipe, IngestConfig, RawRecipe};
//! use serde_json::json;
//!
//! let raw: RawRecipe = serde_json::from_value(json!({
//!     "id": 7,
//!     "title": "Garlic rice",
//!     "ingredients": null,
//!     "calories": "412.5"
//! })).unwrap();
//!
//! let recipe = ingest_recipe(raw, &IngestConfig::default()).unwrap();
//! assert_eq!(recipe.id, "7");
//! assert!(recipe.ingredients.is_empty());
//! assert_eq!(recipe.nutrition.calories, Some(412.5));
//! ```
use std::time::Instant;

use tracing::{debug, warn, Level};

mod config;
mod error;
mod inventory;
mod recipe;
mod types;

pub use crate::config::{ConfigError, IngestConfig};
pub use crate::error::IngestError;
pub use crate::inventory::{InventorySnapshot, MealTypeSelection};
pub use crate::types::{
    MealType, MealTypeFilter, Nutrition, RawRecipe, RecipeCandidate, UserInventory,
};

/// Validate a raw recipe row and return a candidate ready for scoring.
pub fn ingest_recipe(raw: RawRecipe, cfg: &IngestConfig) -> Result<RecipeCandidate, IngestError> {
    let start = Instant::now();
    let title_hint = raw.title.clone();

    let span = tracing::span!(Level::DEBUG, "ingest.recipe", title = ?title_hint);
    let _guard = span.enter();

    match recipe::build_candidate(raw, cfg) {
        Ok(candidate) => {
            let elapsed_micros = start.elapsed().as_micros();
            debug!(
                recipe_id = %candidate.id,
                ingredient_count = candidate.ingredients.len(),
                meal_type = ?candidate.meal_type,
                elapsed_micros,
                "recipe_ingested"
            );
            Ok(candidate)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "recipe_rejected");
            Err(err)
        }
    }
}

/// Ingest a batch of rows, skipping (and logging) the ones that fail.
pub fn ingest_recipes<I>(raws: I, cfg: &IngestConfig) -> Vec<RecipeCandidate>
where
    I: IntoIterator<Item = RawRecipe>,
{
    raws.into_iter()
        .filter_map(|raw| ingest_recipe(raw, cfg).ok())
        .collect()
}

/// Parse a JSON array of recipe rows and ingest every valid row.
pub fn parse_recipes_json(
    json: &str,
    cfg: &IngestConfig,
) -> Result<Vec<RecipeCandidate>, IngestError> {
    let rows: Vec<RawRecipe> = serde_json::from_str(json)?;
    Ok(ingest_recipes(rows, cfg))
}
