// Metrics hooks for the `matcher` crate.
//
// Callers install a global `MatchMetrics` implementation via [`set_match_metrics`],
// then every `Matcher::search` reports its latency, candidate count and hit
// count. No particular metrics backend is assumed.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::RankMode;

/// Metrics observer for searches.
pub trait MatchMetrics: Send + Sync {
    /// Record a completed search.
    ///
    /// `mode` is the effective [`RankMode`], `latency` covers validation,
    /// fetch, scoring and ranking, `candidate_count` is the number of recipes
    /// the source returned and `hit_count` the number of records returned to
    /// the caller.
    fn record_search(
        &self,
        mode: RankMode,
        latency: Duration,
        candidate_count: usize,
        hit_count: usize,
    );

    /// Record a search that failed. The default does nothing.
    fn record_failure(&self, _mode: RankMode, _latency: Duration) {}
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global search metrics recorder.
///
/// Usually called once at startup so every `Matcher` shares the same backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
