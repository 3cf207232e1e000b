//! Recipe row sanitization.
//!
//! Turns a loosely typed [`RawRecipe`] into a [`RecipeCandidate`]:
//!
//! ```text
//! ┌─────────────────────────────┐
//! │ 1. Identity                 │
//! │    - id string / number     │
//! │    - else UUIDv5(title)     │
//! ├─────────────────────────────┤
//! │ 2. Ingredient lists         │
//! │    - null → empty           │
//! │    - non-strings dropped    │
//! │    - blanks dropped         │
//! │    - max_ingredients cap    │
//! ├─────────────────────────────┤
//! │ 3. Passthrough fields       │
//! │    - meal type, nutrition   │
//! │    - instructions           │
//! └─────────────────────────────┘
//! ```
use serde_json::Value;
use tracing::debug;

use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::types::{MealType, Nutrition, RawRecipe, RecipeCandidate};

pub(crate) fn build_candidate(
    raw: RawRecipe,
    cfg: &IngestConfig,
) -> Result<RecipeCandidate, IngestError> {
    let RawRecipe {
        id,
        title,
        ingredients,
        ingredient_phrase,
        calories,
        carbs,
        protein,
        fat,
        instructions,
        meal_type,
    } = raw;

    let title = sanitize_optional_string(title, cfg.strip_control_chars);
    let id = match sanitize_optional_string(id.and_then(id_text), cfg.strip_control_chars) {
        Some(id) => id,
        None => match title.as_deref() {
            Some(title) => derive_recipe_id(cfg, title),
            None => {
                return Err(IngestError::InvalidRecipe(
                    "recipe has neither an id nor a title".into(),
                ))
            }
        },
    };

    let mut ingredients = string_list(ingredients, cfg.strip_control_chars);
    if let Some(cap) = cfg.max_ingredients {
        if ingredients.len() > cap {
            debug!(
                recipe_id = %id,
                kept = cap,
                dropped = ingredients.len() - cap,
                "ingredients_truncated"
            );
            ingredients.truncate(cap);
        }
    }

    // An unrecognised meal type leaves the row usable; it just never passes
    // a non-empty filter.
    let meal_type = meal_type.and_then(|name| name.parse::<MealType>().ok());

    Ok(RecipeCandidate {
        id,
        title: title.unwrap_or_default(),
        ingredients,
        ingredient_phrases: string_list(ingredient_phrase, cfg.strip_control_chars),
        meal_type,
        nutrition: Nutrition {
            calories: number(calories),
            carbs: number(carbs),
            protein: number(protein),
            fat: number(fat),
        },
        instructions: instructions_text(instructions),
    })
}

/// Derives a deterministic recipe id from its title.
///
/// `UUIDv5(cfg.recipe_id_namespace, title)`: the same title always yields the
/// same id, so re-ingesting a dump without ids is stable.
pub(crate) fn derive_recipe_id(cfg: &IngestConfig, title: &str) -> String {
    uuid::Uuid::new_v5(&cfg.recipe_id_namespace, title.as_bytes()).to_string()
}

/// Strips control characters (when asked) and trims; empty becomes `None`.
pub(crate) fn sanitize_optional_string(
    value: Option<String>,
    strip_control: bool,
) -> Option<String> {
    value.and_then(|raw| {
        let filtered = if strip_control {
            raw.chars().filter(|c| !c.is_control()).collect::<String>()
        } else {
            raw
        };
        let trimmed = filtered.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn id_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Keeps the string entries of a JSON array, sanitized, in order.
/// Anything that is not an array (including null) yields an empty list.
fn string_list(value: Option<Value>, strip_control: bool) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => sanitize_optional_string(Some(s), strip_control),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Numeric columns may arrive as JSON numbers or as decimal strings.
fn number(value: Option<Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn instructions_text(value: Option<Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s,
        Value::Array(steps) => steps
            .into_iter()
            .filter_map(|step| match step {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n"),
        _ => return None,
    };
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
