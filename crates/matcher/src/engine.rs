use std::time::Instant;

use canonical::{IngredientToken, NormalizeConfig};
use ingest::{MealTypeFilter, RecipeCandidate, UserInventory};
use tracing::{info, warn, Instrument, Level};

use crate::leaderboard::Leaderboard;
use crate::metrics::metrics_recorder;
use crate::rank::rank;
use crate::score::score_with;
use crate::source::{CandidateQuery, CandidateSource};
use crate::types::{MatchConfig, MatchError, MatchRecord, RankMode};


/// Scores and ranks recipe candidates against a user inventory.
///
/// A `Matcher` holds only configuration. Every search is independent, so a
/// single instance can be shared across tasks.
///
/// The one piece of shared state a search touches is the process-wide
/// [`MatchMetrics`](crate::MatchMetrics) hook: [`search`](Self::search) takes
/// its read lock once on completion to report. The recorder only observes
/// and never changes results.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    cfg: MatchConfig,
    normalize_cfg: NormalizeConfig,
}

impl Matcher {
    /// Construct a matcher from explicit configs, validating both.
    pub fn new(cfg: MatchConfig, normalize_cfg: NormalizeConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        normalize_cfg.validate()?;
        Ok(Self { cfg, normalize_cfg })
    }

    /// Batch mode with default normalization.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    pub fn normalize_config(&self) -> &NormalizeConfig {
        &self.normalize_cfg
    }

    /// Normalize and validate the inventory.
    pub fn user_tokens(
        &self,
        inventory: &UserInventory,
    ) -> Result<Vec<IngredientToken>, MatchError> {
        Ok(inventory.tokens(&self.normalize_cfg)?)
    }

    /// Score every candidate, drop the ones that match nothing and order the
    /// rest according to the configured [`RankMode`].
    ///
    /// In streaming mode at most `limit` records come back; batch mode
    /// returns every matching record.
    pub fn match_candidates<I>(
        &self,
        candidates: I,
        user_tokens: &[IngredientToken],
    ) -> Vec<MatchRecord>
    where
        I: IntoIterator<Item = RecipeCandidate>,
    {
        let scored = candidates
            .into_iter()
            .map(|candidate| score_with(candidate, user_tokens, &self.normalize_cfg))
            .filter(|record| record.match_count > 0);

        match self.cfg.mode {
            RankMode::Batch => rank(scored.collect()),
            RankMode::Streaming => {
                let mut board = Leaderboard::new(self.cfg.limit);
                board.extend(scored);
                board.into_vec()
            }
        }
    }

    /// Run one search: validate the inventory, fetch candidates from
    /// `source`, then score and rank them.
    ///
    /// An empty inventory fails with [`MatchError::Validation`] before the
    /// source is called. Source failures and timeouts fail the whole search;
    /// no partial results are returned.
    pub async fn search<S>(
        &self,
        source: &S,
        inventory: &UserInventory,
        filter: &MealTypeFilter,
    ) -> Result<Vec<MatchRecord>, MatchError>
    where
        S: CandidateSource + ?Sized,
    {
        let span = tracing::span!(
            Level::INFO,
            "matcher.search",
            mode = ?self.cfg.mode,
            inventory_len = inventory.raw_len(),
            meal_filter_len = filter.iter().count()
        );

        async move {
            let start = Instant::now();
            let outcome = self.run_search(source, inventory, filter).await;
            let latency = start.elapsed();
            let elapsed_micros = latency.as_micros();

            match outcome {
                Ok((candidate_count, records)) => {
                    info!(
                        candidate_count,
                        hit_count = records.len(),
                        elapsed_micros,
                        "search_success"
                    );
                    if let Some(recorder) = metrics_recorder() {
                        recorder.record_search(
                            self.cfg.mode,
                            latency,
                            candidate_count,
                            records.len(),
                        );
                    }
                    Ok(records)
                }
                Err(err) => {
                    warn!(error = %err, elapsed_micros, "search_failure");
                    if let Some(recorder) = metrics_recorder() {
                        recorder.record_failure(self.cfg.mode, latency);
                    }
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn run_search<S>(
        &self,
        source: &S,
        inventory: &UserInventory,
        filter: &MealTypeFilter,
    ) -> Result<(usize, Vec<MatchRecord>), MatchError>
    where
        S: CandidateSource + ?Sized,
    {
        let user_tokens = self.user_tokens(inventory)?;
        let query = CandidateQuery::new(&user_tokens, filter.clone(), self.cfg.fetch_limit);

        let candidates = match self.cfg.fetch_timeout() {
            Some(limit) => tokio::time::timeout(limit, source.fetch(&query))
                .await
                .map_err(|_| MatchError::Timeout(limit))??,
            None => source.fetch(&query).await?,
        };

        let candidate_count = candidates.len();
        let records = self.match_candidates(candidates, &user_tokens);
        Ok((candidate_count, records))
    }
}
