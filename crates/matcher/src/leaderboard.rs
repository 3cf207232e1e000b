//! Top-K leaderboard for streaming mode.
//!
//! When the candidate source can return an unbounded number of recipes, the
//! leaderboard keeps only the best `limit` records seen so far, so memory
//! stays O(limit) instead of O(candidates).

use std::cmp::Ordering;

use crate::types::MatchRecord;

/// Leaderboard size used when none is configured.
pub const DEFAULT_LIMIT: usize = 50;

/// Ordering used in streaming mode, best first: more matched user tokens,
/// then fewer missing ingredients.
pub fn streaming_order(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    b.match_count
        .cmp(&a.match_count)
        .then_with(|| a.missing_count.cmp(&b.missing_count))
}

/// Insert `record` into the sorted `board`, keeping at most `limit` entries.
///
/// The record lands after every entry that compares equal to it, so ties
/// keep arrival order. While the board holds more than `limit` entries, the
/// worst (last) one is dropped.
pub fn insert(board: &mut Vec<MatchRecord>, record: MatchRecord, limit: usize) {
    let pos =
        board.partition_point(|existing| streaming_order(existing, &record) != Ordering::Greater);
    // A slot at or past `limit` would be evicted straight away.
    if pos < limit {
        board.insert(pos, record);
    }
    board.truncate(limit);
}

/// A size-bounded, always-sorted set of the best records seen so far.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    limit: usize,
    records: Vec<MatchRecord>,
}

impl Leaderboard {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            records: Vec::with_capacity(limit.min(DEFAULT_LIMIT).saturating_add(1)),
        }
    }

    pub fn push(&mut self, record: MatchRecord) {
        insert(&mut self.records, record, self.limit);
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current entries, best first.
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn into_vec(self) -> Vec<MatchRecord> {
        self.records
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl Extend<MatchRecord> for Leaderboard {
    fn extend<T: IntoIterator<Item = MatchRecord>>(&mut self, iter: T) {
        for record in iter {
            self.push(record);
        }
    }
}
