//! Adapts the FMP client to the pipeline's provider contract.

use chrono::{Duration, Utc};
use ronda_traits::{
    Bar, FundamentalSnapshot, MarketDataProvider, MarketSnapshot, RondaError, SymbolTimeSeries,
};

use crate::client::FmpClient;
use crate::types::{HistoricalPrice, Period};

impl MarketDataProvider for FmpClient {
    /// Fetch bars plus fundamentals for one symbol.
    ///
    /// Prices are required: an empty or failed price response maps to
    /// `DataUnavailable` so the ranker can skip the symbol. Fundamentals
    /// are best-effort: a missing ratios, growth, or profile response
    /// falls back to the neutral snapshot instead of failing the fetch.
    async fn fetch(
        &self,
        symbol: &str,
        lookback_days: usize,
    ) -> ronda_traits::Result<MarketSnapshot> {
        // Convert trading days to calendar days (approx 1.5x) plus buffer.
        let calendar_days = (lookback_days as f64 * 1.5) as i64 + 30;
        let to = Utc::now().date_naive();
        let from = to - Duration::days(calendar_days);

        let prices = self
            .historical_prices(
                symbol,
                Some(&from.format("%Y-%m-%d").to_string()),
                Some(&to.format("%Y-%m-%d").to_string()),
            )
            .await
            .map_err(|e| RondaError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: e.to_string(),
            })?;

        let bars = bars_from_prices(&prices);
        let series = SymbolTimeSeries::new(symbol, bars)?;

        let (ratios, growth, profile) = tokio::join!(
            self.ratios(symbol, Period::Annual, Some(1)),
            self.financial_growth(symbol, Period::Annual, Some(1)),
            self.profile(symbol),
        );

        let mut fundamentals = FundamentalSnapshot::default();
        match ratios {
            Ok(ratios) => {
                if let Some(r) = ratios.first() {
                    fundamentals.roe = r.return_on_equity;
                    fundamentals.debt_to_equity = r.debt_equity_ratio;
                    fundamentals.net_margin = r.net_profit_margin;
                    fundamentals.operating_margin = r.operating_profit_margin;
                    fundamentals.current_ratio = r.current_ratio;
                }
            }
            Err(e) => log::warn!("{symbol}: ratios unavailable, using neutral defaults: {e}"),
        }
        match growth {
            Ok(growth) => {
                if let Some(g) = growth.first() {
                    fundamentals.revenue_growth = g.revenue_growth;
                }
            }
            Err(e) => log::warn!("{symbol}: growth unavailable, using neutral defaults: {e}"),
        }
        match profile {
            Ok(profile) if !profile.sector.is_empty() => {
                fundamentals.sector = Some(profile.sector);
            }
            Ok(_) => {}
            Err(e) => log::warn!("{symbol}: profile unavailable, sector unknown: {e}"),
        }

        Ok(MarketSnapshot {
            series,
            fundamentals,
        })
    }
}

/// Convert FMP price rows into chronological bars.
///
/// Rows with unparseable dates are dropped; FMP returns newest-first, and
/// the series constructor re-sorts ascending.
fn bars_from_prices(prices: &[HistoricalPrice]) -> Vec<Bar> {
    prices
        .iter()
        .filter_map(|p| {
            p.parsed_date().map(|date| Bar {
                date,
                open: p.open,
                high: p.high,
                low: p.low,
                close: p.close,
                volume: p.volume,
            })
        })
        .collect()
}
