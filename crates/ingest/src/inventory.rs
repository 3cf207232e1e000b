//! User inventory validation and the saved-inventory document.
//!
//! The inventory is passed explicitly into every search; nothing here keeps
//! state between calls. [`InventorySnapshot`] reads the JSON document the
//! ingredient form saves:
//!
//! ```json
//! {
//!   "produce": ["Onion", "garlic"],
//!   "pantry": ["rice"],
//!   "mealTypes": ["dinner"],
//!   "savedAt": "2024-03-01T18:30:00Z"
//! }
//! ```
//!
//! `mealTypes` may also be the checkbox map form
//! `{"breakfast": false, "dinner": true}`.
use std::collections::BTreeMap;

use canonical::{normalize_list, IngredientToken, NormalizeConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::IngestError;
use crate::types::{nullable_list, MealType, MealTypeFilter, UserInventory};

impl UserInventory {
    pub fn new<P, Q>(produce: P, pantry: Q) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        Q: IntoIterator,
        Q::Item: Into<String>,
    {
        Self {
            produce: produce.into_iter().map(Into::into).collect(),
            pantry: pantry.into_iter().map(Into::into).collect(),
        }
    }

    /// Merge produce and pantry into one normalized token list.
    ///
    /// Order is produce then pantry, duplicates are kept, blank entries are
    /// dropped. Returns [`IngestError::EmptyInventory`] when nothing is left.
    pub fn tokens(&self, cfg: &NormalizeConfig) -> Result<Vec<IngredientToken>, IngestError> {
        let tokens = normalize_list(self.produce.iter().chain(self.pantry.iter()), cfg);
        if tokens.is_empty() {
            return Err(IngestError::EmptyInventory);
        }
        Ok(tokens)
    }

    /// Number of raw entries across both lists, blanks included.
    pub fn raw_len(&self) -> usize {
        self.produce.len() + self.pantry.len()
    }
}

/// Meal-type selection as stored by the form: either the selected names or
/// the full checkbox map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MealTypeSelection {
    List(Vec<String>),
    Checkboxes(BTreeMap<String, bool>),
}

impl Default for MealTypeSelection {
    fn default() -> Self {
        MealTypeSelection::List(Vec::new())
    }
}

impl MealTypeSelection {
    pub fn to_filter(&self) -> Result<MealTypeFilter, IngestError> {
        match self {
            MealTypeSelection::List(names) => MealTypeFilter::parse(names),
            MealTypeSelection::Checkboxes(boxes) => boxes
                .iter()
                .filter(|(_, checked)| **checked)
                .map(|(name, _)| name.parse::<MealType>())
                .collect(),
        }
    }
}

/// A saved inventory document. `null` lists read as empty and a `null`
/// meal-type selection as no filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InventorySnapshot {
    #[serde(deserialize_with = "nullable_list")]
    pub produce: Vec<String>,
    #[serde(deserialize_with = "nullable_list")]
    pub pantry: Vec<String>,
    #[serde(deserialize_with = "nullable_selection")]
    pub meal_types: MealTypeSelection,
    pub saved_at: Option<DateTime<Utc>>,
}

fn nullable_selection<'de, D>(deserializer: D) -> Result<MealTypeSelection, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<MealTypeSelection>::deserialize(deserializer)?.unwrap_or_default())
}

impl InventorySnapshot {
    pub fn from_json(json: &str) -> Result<Self, IngestError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, IngestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn inventory(&self) -> UserInventory {
        UserInventory {
            produce: self.produce.clone(),
            pantry: self.pantry.clone(),
        }
    }

    pub fn meal_filter(&self) -> Result<MealTypeFilter, IngestError> {
        self.meal_types.to_filter()
    }
}
