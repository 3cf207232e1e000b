//! Larder canonical ingredient layer.
//!
//! Every ingredient string that takes part in matching, whether it comes
//! from the user's produce and pantry lists or from a recipe row, passes
//! through this crate first so that comparisons are made between tokens in
//! one canonical form.
//!
//! ## What we do
//!
//! - Lowercasing and edge trimming (always)
//! - Unicode NFKC normalization (opt-in)
//! - Whitespace collapsing (opt-in)
//! - Punctuation stripping (opt-in)
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no locale. The same input and config give the same
//! token on any machine, and normalizing a token again returns it unchanged.

mod config;
mod error;
mod normalize;
mod token;
mod whitespace;

pub use crate::config::NormalizeConfig;
pub use crate::error::CanonicalError;
pub use crate::normalize::{normalize, normalize_list, normalize_with};
pub use crate::token::IngredientToken;
pub use crate::whitespace::collapse_whitespace;
