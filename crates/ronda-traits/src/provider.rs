//! Data-provider contract for the pipeline.
//!
//! The universe ranker is generic over [`MarketDataProvider`], so tests can
//! substitute an in-memory fixture for the network client.

use crate::{FundamentalSnapshot, Result, SymbolTimeSeries};

/// Bars plus fundamentals for one symbol, as returned by a provider.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    /// Historical bars, chronological.
    pub series: SymbolTimeSeries,
    /// Point-in-time fundamentals; all-neutral when unavailable upstream.
    pub fundamentals: FundamentalSnapshot,
}

/// A source of per-symbol market data.
///
/// Implementations make network calls and may fail or return partial data;
/// a failed fetch must surface as an `Err` so the ranker can skip the
/// symbol and continue the batch. Fetches are deterministic for a fixed
/// historical window once the provider snapshot is stable, but not
/// idempotent across calls if upstream data is updated.
pub trait MarketDataProvider: Send + Sync {
    /// Fetch bars covering roughly `lookback_days` trading days plus
    /// current fundamentals for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::DataUnavailable`](crate::RondaError) when the
    /// symbol is unknown or the response holds no rows. Transport errors
    /// map to the same variant at the call boundary; the ranker treats
    /// every fetch failure as a skip.
    fn fetch(
        &self,
        symbol: &str,
        lookback_days: usize,
    ) -> impl std::future::Future<Output = Result<MarketSnapshot>> + Send;
}
