//! Deterministic in-memory provider for offline runs and tests.

use ronda_traits::{
    Bar, Date, FundamentalSnapshot, MarketDataProvider, MarketSnapshot, Result, RondaError,
    SymbolTimeSeries,
};
use std::collections::HashMap;

/// Build daily bars from a slice of closes, starting 2024-01-01.
///
/// Open/high/low are derived from the close with a fixed spread so the
/// series is fully deterministic.
#[must_use]
pub fn closes_series(closes: &[f64]) -> Vec<Bar> {
    let start = Date::from_ymd_opt(2024, 1, 1).expect("valid date");
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar {
            date: start + chrono::Days::new(i as u64),
            open: close,
            high: close * 1.01,
            low: close * 0.99,
            close,
            volume: 10_000.0,
        })
        .collect()
}

/// An in-memory [`MarketDataProvider`] keyed by symbol.
///
/// Symbols not inserted fail with `DataUnavailable`, as does a symbol
/// inserted with zero bars, mirroring an empty provider response.
#[derive(Debug, Clone, Default)]
pub struct FixtureProvider {
    snapshots: HashMap<String, (Vec<Bar>, FundamentalSnapshot)>,
}

impl FixtureProvider {
    /// Create an empty fixture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bars and fundamentals for a symbol.
    pub fn insert(
        &mut self,
        symbol: impl Into<String>,
        bars: Vec<Bar>,
        fundamentals: FundamentalSnapshot,
    ) {
        self.snapshots.insert(symbol.into(), (bars, fundamentals));
    }

    /// Number of registered symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the fixture is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl MarketDataProvider for FixtureProvider {
    async fn fetch(&self, symbol: &str, _lookback_days: usize) -> Result<MarketSnapshot> {
        let (bars, fundamentals) =
            self.snapshots
                .get(symbol)
                .cloned()
                .ok_or_else(|| RondaError::DataUnavailable {
                    symbol: symbol.to_string(),
                    reason: "symbol not registered in fixture".to_string(),
                })?;
        Ok(MarketSnapshot {
            series: SymbolTimeSeries::new(symbol, bars)?,
            fundamentals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_roundtrip() {
        let mut provider = FixtureProvider::new();
        provider.insert(
            "AAPL",
            closes_series(&[100.0, 101.0, 102.0]),
            FundamentalSnapshot::default(),
        );
        assert_eq!(provider.len(), 1);

        let snapshot = provider.fetch("AAPL", 30).await.unwrap();
        assert_eq!(snapshot.series.len(), 3);
        assert_eq!(snapshot.series.symbol(), "AAPL");
    }

    #[tokio::test]
    async fn test_missing_symbol_fails() {
        let provider = FixtureProvider::new();
        let result = provider.fetch("ZZZZ", 30).await;
        assert!(matches!(result, Err(RondaError::DataUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_empty_bars_fail_like_empty_response() {
        let mut provider = FixtureProvider::new();
        provider.insert("EMPTY", vec![], FundamentalSnapshot::default());
        let result = provider.fetch("EMPTY", 30).await;
        assert!(matches!(result, Err(RondaError::DataUnavailable { .. })));
    }
}
