//! Scoring one recipe against a user inventory.
//!
//! A user token and a recipe ingredient match when either contains the
//! other (see [`IngredientToken::overlaps`]). This absorbs descriptive
//! phrases: "chicken breast" in the pantry satisfies a recipe asking for
//! "chicken", and "garlic" satisfies "garlic cloves".

use canonical::{normalize_list, IngredientToken, NormalizeConfig};
use ingest::RecipeCandidate;

use crate::types::MatchRecord;

/// Score `candidate` against already-normalized `user_tokens` with the
/// default normalization rules for recipe ingredients.
pub fn score(candidate: RecipeCandidate, user_tokens: &[IngredientToken]) -> MatchRecord {
    score_with(candidate, user_tokens, &NormalizeConfig::default())
}

/// Score `candidate` against `user_tokens`, normalizing recipe ingredients
/// with `cfg`.
///
/// `user_tokens` should be normalized with the same `cfg`. An empty token
/// list is not an error here; callers validate the inventory first.
pub fn score_with(
    candidate: RecipeCandidate,
    user_tokens: &[IngredientToken],
    cfg: &NormalizeConfig,
) -> MatchRecord {
    let recipe_tokens = normalize_list(&candidate.ingredients, cfg);
    let mut covered = vec![false; recipe_tokens.len()];

    let mut matched_user = Vec::new();
    let mut extra_user = Vec::new();

    for user in user_tokens {
        let mut hit = false;
        for (idx, ingredient) in recipe_tokens.iter().enumerate() {
            if user.overlaps(ingredient) {
                covered[idx] = true;
                hit = true;
            }
        }
        if hit {
            matched_user.push(user.clone());
        } else {
            extra_user.push(user.clone());
        }
    }

    let ingredient_count = recipe_tokens.len();
    let missing_ingredients: Vec<IngredientToken> = recipe_tokens
        .into_iter()
        .zip(covered)
        .filter_map(|(token, hit)| (!hit).then_some(token))
        .collect();

    let match_count = matched_user.len();
    let missing_count = missing_ingredients.len();

    MatchRecord {
        candidate,
        matched_user,
        extra_user,
        missing_ingredients,
        match_count,
        missing_count,
        perfect: missing_count == 0 && match_count > 0,
        ingredient_count,
    }
}
