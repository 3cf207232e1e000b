use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::token::IngredientToken;
use crate::whitespace::collapse_whitespace;

/// Normalize a raw ingredient string with the default rules: lowercase and
/// trim.
pub fn normalize(raw: &str) -> IngredientToken {
    normalize_with(raw, &NormalizeConfig::default())
}

/// Normalize a raw ingredient string with explicit rules.
///
/// The output may be empty (for blank input); callers that build inventories
/// drop empty tokens, see [`normalize_list`].
pub fn normalize_with(raw: &str, cfg: &NormalizeConfig) -> IngredientToken {
    let text: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(raw.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(raw)
    };

    let mut lowered = text.to_lowercase();
    // Case mapping can emit decomposed sequences, so recompose once more to
    // keep the output a fixed point.
    if cfg.normalize_unicode {
        lowered = lowered.nfkc().collect();
    }

    if cfg.strip_punctuation {
        lowered = lowered
            .chars()
            .map(|ch| if ch.is_punctuation() { ' ' } else { ch })
            .collect();
    }

    let out = if cfg.collapse_whitespace {
        collapse_whitespace(&lowered)
    } else {
        let trimmed = lowered.trim();
        if trimmed.len() == lowered.len() {
            lowered
        } else {
            trimmed.to_string()
        }
    };

    IngredientToken::from_normalized(out)
}

/// Normalize every entry of `raw`, keeping order and duplicates but dropping
/// entries that are blank after normalization.
pub fn normalize_list<I, S>(raw: I, cfg: &NormalizeConfig) -> Vec<IngredientToken>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|item| normalize_with(item.as_ref(), cfg))
        .filter(|token| !token.is_empty())
        .collect()
}
