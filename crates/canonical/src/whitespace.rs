//! Whitespace normalization utilities.
//!
//! Ingredient names typed by hand often carry doubled spaces or tabs
//! ("chicken  breast"). [`collapse_whitespace`] folds any run of Unicode
//! whitespace into a single ASCII space and trims both ends.
//!
//! # Examples
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! let normalized = collapse_whitespace("  olive \t oil  ");
//! assert_eq!(normalized, "olive oil");
//! ```

/// Collapses repeated whitespace, trims edges, and normalizes newlines to
/// single spaces.
///
/// The result has no leading or trailing whitespace and never contains two
/// consecutive spaces, so applying it twice is the same as applying it once.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("green\u{00A0}onion"), "green onion");
/// assert_eq!(collapse_whitespace("   \n\t   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
