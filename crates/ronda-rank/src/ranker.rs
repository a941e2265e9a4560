//! The universe ranker: batch fetch, score, sort, summarize.

use ronda_features::FeatureExtractor;
use ronda_score::ModelSpec;
use ronda_traits::{MarketDataProvider, Result};
use serde::{Deserialize, Serialize};

use crate::result::{CompositeResult, RunOutcome, SkippedSymbol};
use crate::summary::RunSummary;

/// Configuration for a ranking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Trading days of history to request per symbol (default: 504,
    /// roughly two years).
    pub lookback_days: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self { lookback_days: 504 }
    }
}

/// Runs one model over a fixed universe of symbols.
///
/// Symbols are processed sequentially and independently; no cross-symbol
/// state exists during the compute phase. A single symbol's failure never
/// aborts the batch: it is recorded as skipped and the run continues.
/// Sorting happens only after all symbols are collected, so the final
/// ordering is deterministic for fixed inputs.
#[derive(Debug)]
pub struct UniverseRanker<P> {
    provider: P,
    extractor: FeatureExtractor,
    model: ModelSpec,
    config: RankerConfig,
}

impl<P: MarketDataProvider> UniverseRanker<P> {
    /// Create a ranker with default extraction and lookback settings.
    #[must_use]
    pub fn new(provider: P, model: ModelSpec) -> Self {
        Self {
            provider,
            extractor: FeatureExtractor::default(),
            model,
            config: RankerConfig::default(),
        }
    }

    /// Create a ranker with explicit extractor and run configuration.
    #[must_use]
    pub const fn with_config(
        provider: P,
        model: ModelSpec,
        extractor: FeatureExtractor,
        config: RankerConfig,
    ) -> Self {
        Self {
            provider,
            extractor,
            model,
            config,
        }
    }

    /// The model this ranker runs.
    #[must_use]
    pub const fn model(&self) -> &ModelSpec {
        &self.model
    }

    /// Score and rank the universe.
    ///
    /// Each symbol transitions Pending → Fetched | Failed → Scored →
    /// Ranked; a failure is terminal for the symbol within this run (no
    /// retries). Results are sorted by composite descending with ties
    /// keeping universe order, then ranks are assigned 1..N.
    pub async fn run(&self, symbols: &[String]) -> RunOutcome {
        log::info!(
            "Scoring {} symbols with model '{}'",
            symbols.len(),
            self.model.name()
        );

        let mut results: Vec<CompositeResult> = Vec::with_capacity(symbols.len());
        let mut skipped: Vec<SkippedSymbol> = Vec::new();

        for symbol in symbols {
            match self.score_symbol(symbol).await {
                Ok(result) => results.push(result),
                Err(error) => {
                    log::warn!("Skipping {symbol}: {error}");
                    skipped.push(SkippedSymbol::from_error(symbol, &error));
                }
            }
        }

        // Stable sort: equal composites keep universe order.
        results.sort_by(|a, b| {
            b.composite
                .partial_cmp(&a.composite)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for (idx, result) in results.iter_mut().enumerate() {
            result.rank = idx + 1;
        }

        let summary = RunSummary::compute(&results, skipped.len());
        log::info!(
            "Run complete: {} scored, {} skipped",
            summary.scored,
            summary.skipped
        );

        RunOutcome {
            model: self.model.name().to_string(),
            results,
            skipped,
            summary,
        }
    }

    /// Fetch, extract, and score one symbol.
    async fn score_symbol(&self, symbol: &str) -> Result<CompositeResult> {
        let snapshot = self
            .provider
            .fetch(symbol, self.config.lookback_days)
            .await?;
        let features = self
            .extractor
            .extract(&snapshot.series, &snapshot.fundamentals)?;
        let score = self.model.aggregate(&features);

        log::debug!(
            "{symbol}: composite {:.4} ({})",
            score.composite,
            score.rating
        );

        Ok(CompositeResult {
            symbol: symbol.to_string(),
            sector: snapshot.fundamentals.sector.clone(),
            components: score.components,
            composite: score.composite,
            rating: score.rating,
            rank: 0, // assigned after the sort
            confidence: features.confidence,
            features,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{closes_series, FixtureProvider};
    use crate::result::SkipReason;
    use ronda_score::models;
    use ronda_traits::FundamentalSnapshot;

    fn universe(symbols: &[&str]) -> Vec<String> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    /// Steady riser: strong trend profile.
    fn riser() -> Vec<f64> {
        (0..260).map(|i| 100.0 * 1.002f64.powi(i)).collect()
    }

    /// Flat series: neutral everything.
    fn flat() -> Vec<f64> {
        vec![100.0; 260]
    }

    fn ranker(provider: FixtureProvider) -> UniverseRanker<FixtureProvider> {
        UniverseRanker::new(provider, models::trend_strength().unwrap())
    }

    #[tokio::test]
    async fn test_failed_symbol_does_not_abort_batch() {
        let mut provider = FixtureProvider::new();
        provider.insert("AAA", closes_series(&riser()), FundamentalSnapshot::default());
        provider.insert("BBB", closes_series(&flat()), FundamentalSnapshot::default());
        // "CCC" is absent: the fetch fails.

        let outcome = ranker(provider)
            .run(&universe(&["AAA", "BBB", "CCC"]))
            .await;

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].symbol, "CCC");
        assert_eq!(outcome.skipped[0].reason, SkipReason::DataUnavailable);

        // The riser outranks the flat series.
        assert_eq!(outcome.results[0].symbol, "AAA");
        assert_eq!(outcome.results[0].rank, 1);
        assert_eq!(outcome.results[1].symbol, "BBB");
        assert_eq!(outcome.results[1].rank, 2);
    }

    #[tokio::test]
    async fn test_zero_bar_fetch_is_skipped_not_null_scored() {
        let mut provider = FixtureProvider::new();
        provider.insert("EMPTY", vec![], FundamentalSnapshot::default());
        provider.insert("AAA", closes_series(&riser()), FundamentalSnapshot::default());

        let outcome = ranker(provider).run(&universe(&["EMPTY", "AAA"])).await;

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].symbol, "AAA");
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].symbol, "EMPTY");
        assert_eq!(outcome.skipped[0].reason, SkipReason::DataUnavailable);
        assert!(outcome
            .results
            .iter()
            .all(|r| r.composite.is_finite()));
    }

    #[tokio::test]
    async fn test_single_bar_symbol_skipped_as_insufficient() {
        let mut provider = FixtureProvider::new();
        provider.insert("NEWCO", closes_series(&[100.0]), FundamentalSnapshot::default());

        let outcome = ranker(provider).run(&universe(&["NEWCO"])).await;

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.skipped[0].reason, SkipReason::InsufficientHistory);
    }

    #[tokio::test]
    async fn test_ranking_is_deterministic() {
        let build = || {
            let mut provider = FixtureProvider::new();
            provider.insert("AAA", closes_series(&riser()), FundamentalSnapshot::default());
            provider.insert("BBB", closes_series(&flat()), FundamentalSnapshot::default());
            let declining: Vec<f64> = (0..260).map(|i| 100.0 * 0.999f64.powi(i)).collect();
            provider.insert("CCC", closes_series(&declining), FundamentalSnapshot::default());
            ranker(provider)
        };
        let symbols = universe(&["AAA", "BBB", "CCC"]);

        let first = build().run(&symbols).await;
        let second = build().run(&symbols).await;

        let order_first: Vec<&str> = first.results.iter().map(|r| r.symbol.as_str()).collect();
        let order_second: Vec<&str> = second.results.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(order_first, order_second);
        for (a, b) in first.results.iter().zip(second.results.iter()) {
            assert_eq!(a.composite, b.composite);
            assert_eq!(a.rank, b.rank);
        }
    }

    #[tokio::test]
    async fn test_ties_keep_universe_order() {
        let mut provider = FixtureProvider::new();
        provider.insert("ZZZ", closes_series(&flat()), FundamentalSnapshot::default());
        provider.insert("AAA", closes_series(&flat()), FundamentalSnapshot::default());

        // ZZZ comes first in the universe, so it wins the tie.
        let outcome = ranker(provider).run(&universe(&["ZZZ", "AAA"])).await;
        assert_eq!(outcome.results[0].symbol, "ZZZ");
        assert_eq!(outcome.results[0].rank, 1);
        assert_eq!(outcome.results[1].symbol, "AAA");
        assert_eq!(outcome.results[1].rank, 2);
        assert_eq!(outcome.results[0].composite, outcome.results[1].composite);
    }

    #[tokio::test]
    async fn test_sector_metadata_flows_to_summary() {
        let mut provider = FixtureProvider::new();
        let tech = FundamentalSnapshot {
            sector: Some("Technology".to_string()),
            ..Default::default()
        };
        provider.insert("AAA", closes_series(&riser()), tech.clone());
        provider.insert("BBB", closes_series(&flat()), tech);

        let outcome = ranker(provider).run(&universe(&["AAA", "BBB"])).await;
        assert_eq!(outcome.summary.sectors.len(), 1);
        assert_eq!(outcome.summary.sectors[0].sector, "Technology");
        assert_eq!(outcome.summary.sectors[0].count, 2);
    }
}
