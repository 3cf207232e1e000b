//! # Larder Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` answers one question: given what is in my fridge and pantry,
//! which recipes can I cook, and what am I missing? It takes a user
//! inventory, pulls candidate recipes from a [`CandidateSource`], scores each
//! one by ingredient overlap and returns the matching recipes best first.
//!
//! ## Core Types
//!
//! - [`MatchRecord`]: one scored recipe with matched, extra and missing
//!   ingredients, counts and the `perfect` flag.
//! - [`MatchConfig`] / [`RankMode`]: batch or streaming ranking, leaderboard
//!   size, candidate fetch limit and timeout.
//! - [`CandidateSource`] / [`CandidateQuery`]: the async seam to whatever
//!   stores recipes. [`InMemorySource`] is the reference implementation.
//! - [`Matcher`]: validates, fetches, scores and ranks.
//!
//! ## Matching rule
//!
//! A user token and a recipe ingredient match when either string contains
//! the other after normalization, so "chicken breast" covers "chicken" and
//! "garlic" covers "garlic cloves". Records that match no user token are
//! never returned.
//!
//! ## Ranking
//!
//! - **Batch** ([`batch_order`]): perfect recipes first, smaller perfect
//!   recipes before larger ones, then more matches, then fewer missing
//!   ingredients. Stable.
//! - **Streaming** ([`streaming_order`]): more matches, then fewer missing,
//!   kept in a bounded [`Leaderboard`] of `limit` entries.
//!
//! ## Example Usage
//!
//! ```
//! use ingest::{MealTypeFilter, RecipeCandidate, UserInventory};
//! use matcher::{InMemorySource, Matcher};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let source = InMemorySource::new(vec![
//!     RecipeCandidate::new("1", "Onion soup", ["onion", "butter"]),
//!     RecipeCandidate::new("2", "Fried rice", ["rice", "egg", "onion"]),
//! ]);
//! let inventory = UserInventory::new(["onion"], ["butter"]);
//!
//! let records = Matcher::with_defaults()
//!     .search(&source, &inventory, &MealTypeFilter::new())
//!     .await
//!     .expect("search");
//!
//! assert_eq!(records[0].candidate.title, "Onion soup");
//! assert!(records[0].perfect);
//! assert_eq!(records[1].missing_count, 2);
//! # });
//! ```

mod engine;
mod leaderboard;
mod metrics;
mod rank;
mod score;
mod source;
mod types;

pub use crate::engine::Matcher;
pub use crate::leaderboard::{insert, streaming_order, Leaderboard, DEFAULT_LIMIT};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::rank::{batch_order, rank};
pub use crate::score::{score, score_with};
pub use crate::source::{CandidateQuery, CandidateSource, InMemorySource, SourceError};
pub use crate::types::{MatchConfig, MatchError, MatchRecord, RankMode};
