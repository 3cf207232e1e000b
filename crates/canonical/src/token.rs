use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use serde::Serialize;

/// A normalized ingredient name.
///
/// Tokens are only produced by [`normalize`](crate::normalize) and
/// [`normalize_with`](crate::normalize_with), so two tokens compare equal
/// exactly when their normalized values are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IngredientToken(String);

impl IngredientToken {
    pub(crate) fn from_normalized(value: String) -> Self {
        Self(value)
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True when either token occurs inside the other.
    ///
    /// This is the loose rule used for ingredient matching: "chicken breast"
    /// and "chicken" overlap in both directions. An empty token overlaps
    /// nothing.
    pub fn overlaps(&self, other: &IngredientToken) -> bool {
        if self.0.is_empty() || other.0.is_empty() {
            return false;
        }
        self.0.contains(other.as_str()) || other.0.contains(self.as_str())
    }
}

impl Deref for IngredientToken {
    type Target = str;

    fn deref(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for IngredientToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for IngredientToken {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq<str> for IngredientToken {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for IngredientToken {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for IngredientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
