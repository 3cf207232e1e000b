//! Core data model types for the ingest crate.
//!
//! ```text
//! RawRecipe (duck-typed datastore row)
//! ├── id: Option<Value>            string or number
//! ├── title: Option<String>
//! ├── ingredients: Option<Value>   nullable array
//! ├── ingredient_phrase: Option<Value>
//! ├── calories/carbs/protein/fat: Option<Value>
//! ├── instructions: Option<Value>
//! └── meal_type: Option<String>
//!
//!         ↓ ingest_recipe()
//!
//! RecipeCandidate
//! ├── id: String                   provided or UUIDv5(title)
//! ├── title: String
//! ├── ingredients: Vec<String>     never null, blanks removed
//! ├── ingredient_phrases: Vec<String>
//! ├── meal_type: Option<MealType>
//! ├── nutrition: Nutrition
//! └── instructions: Option<String>
//! ```
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::IngestError;

/// Meal category a recipe belongs to and a user can filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = IngestError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MealType::ALL
            .into_iter()
            .find(|meal| meal.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| IngestError::UnknownMealType(s.to_string()))
    }
}

/// Set of meal types a search is restricted to. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealTypeFilter(BTreeSet<MealType>);

impl MealTypeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, meal: MealType) -> bool {
        self.0.contains(&meal)
    }

    pub fn insert(&mut self, meal: MealType) -> bool {
        self.0.insert(meal)
    }

    pub fn iter(&self) -> impl Iterator<Item = MealType> + '_ {
        self.0.iter().copied()
    }

    /// Whether a recipe with the given meal type passes the filter.
    ///
    /// An empty filter accepts everything, including recipes without a meal
    /// type. A non-empty filter rejects recipes without one.
    pub fn accepts(&self, meal: Option<MealType>) -> bool {
        if self.0.is_empty() {
            return true;
        }
        meal.is_some_and(|m| self.0.contains(&m))
    }

    /// Parse a list of meal-type names.
    pub fn parse<I, S>(names: I) -> Result<Self, IngestError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| name.as_ref().parse::<MealType>())
            .collect()
    }
}

impl FromIterator<MealType> for MealTypeFilter {
    fn from_iter<T: IntoIterator<Item = MealType>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The user's available ingredients, as typed.
///
/// `produce` and `pantry` are kept apart for display but merged for
/// matching, produce first. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInventory {
    pub produce: Vec<String>,
    pub pantry: Vec<String>,
}

/// Optional per-serving nutrition values, carried through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    pub calories: Option<f64>,
    pub carbs: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
}

/// A recipe row as returned by a datastore, before validation.
///
/// Every field is optional and loosely typed so that rows with nulls, numeric
/// strings or numeric ids still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecipe {
    pub id: Option<serde_json::Value>,
    pub title: Option<String>,
    pub ingredients: Option<serde_json::Value>,
    #[serde(alias = "ingredientPhrase")]
    pub ingredient_phrase: Option<serde_json::Value>,
    pub calories: Option<serde_json::Value>,
    pub carbs: Option<serde_json::Value>,
    pub protein: Option<serde_json::Value>,
    pub fat: Option<serde_json::Value>,
    pub instructions: Option<serde_json::Value>,
    #[serde(alias = "mealType")]
    pub meal_type: Option<String>,
}

/// A validated recipe ready for scoring.
///
/// `ingredients` is always present; a missing or null list becomes empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCandidate {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "nullable_list")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub ingredient_phrases: Vec<String>,
    #[serde(default)]
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl RecipeCandidate {
    /// Build a candidate with just an id, title and ingredient list.
    pub fn new<I, S>(id: impl Into<String>, title: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            ingredient_phrases: Vec::new(),
            meal_type: None,
            nutrition: Nutrition::default(),
            instructions: None,
        }
    }

    pub fn with_meal_type(mut self, meal: MealType) -> Self {
        self.meal_type = Some(meal);
        self
    }
}

pub(crate) fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
