//! Common types used throughout the Ronda pipeline.
//!
//! This module defines the per-symbol market data model: daily bars, the
//! time series wrapper the feature extractor consumes, and the point-in-time
//! fundamental snapshot.

use derive_more::Display;
use serde::{Deserialize, Serialize};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier.
///
/// Symbols identify securities across the Ronda pipeline. Typically these
/// are ticker symbols like "AAPL" or "MSFT".
pub type Symbol = String;

/// A single daily OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Trading date.
    pub date: Date,
    /// Opening price.
    pub open: f64,
    /// Intraday high.
    pub high: f64,
    /// Intraday low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Trading volume.
    pub volume: f64,
}

/// Per-symbol historical bars, chronological and immutable once built.
///
/// Missing trading days are simply absent; no gap filling is performed.
/// The series is owned exclusively by the pipeline run that fetched it and
/// discarded afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolTimeSeries {
    symbol: Symbol,
    bars: Vec<Bar>,
}

impl SymbolTimeSeries {
    /// Build a time series from unordered bars.
    ///
    /// Bars are sorted by date ascending. An empty input is rejected so a
    /// zero-row fetch can never masquerade as a scorable series.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::DataUnavailable`](crate::RondaError) when
    /// `bars` is empty.
    pub fn new(symbol: impl Into<Symbol>, mut bars: Vec<Bar>) -> crate::Result<Self> {
        let symbol = symbol.into();
        if bars.is_empty() {
            return Err(crate::RondaError::DataUnavailable {
                symbol,
                reason: "no bars returned".to_string(),
            });
        }
        bars.sort_by_key(|b| b.date);
        Ok(Self { symbol, bars })
    }

    /// The symbol this series belongs to.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The chronological bars.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Number of bars in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the series is empty. Always false for a constructed series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Closing prices in chronological order.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Volumes in chronological order.
    #[must_use]
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Simple close-to-close returns, length `len() - 1`.
    ///
    /// A non-positive previous close maps the return to 0.0 rather than
    /// producing an infinity.
    #[must_use]
    pub fn simple_returns(&self) -> Vec<f64> {
        self.bars
            .windows(2)
            .map(|w| crate::stats::safe_div(w[1].close - w[0].close, w[0].close, 0.0))
            .collect()
    }

    /// Log returns `ln(close[t] / close[t-1])`, length `len() - 1`.
    ///
    /// Non-positive prices map the return to 0.0.
    #[must_use]
    pub fn log_returns(&self) -> Vec<f64> {
        self.bars
            .windows(2)
            .map(|w| {
                if w[0].close > 0.0 && w[1].close > 0.0 {
                    (w[1].close / w[0].close).ln()
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Date of the most recent bar.
    #[must_use]
    pub fn last_date(&self) -> Date {
        self.bars[self.bars.len() - 1].date
    }
}

/// Point-in-time fundamental ratios for a symbol.
///
/// Every ratio defaults to 0.0 (the neutral sentinel) when the upstream
/// provider omits it, so a partial fundamentals response never fails the
/// pipeline. `Default` yields the all-neutral snapshot used when
/// fundamentals cannot be fetched at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    /// Return on equity.
    pub roe: f64,
    /// Total debt over shareholder equity.
    pub debt_to_equity: f64,
    /// Year-over-year revenue growth.
    pub revenue_growth: f64,
    /// Net profit margin.
    pub net_margin: f64,
    /// Operating margin.
    pub operating_margin: f64,
    /// Current assets over current liabilities.
    pub current_ratio: f64,
    /// GICS-style sector name, when the provider supplies one.
    pub sector: Option<String>,
}

/// Confidence attached to a feature computation.
///
/// `Degraded` marks results computed on a shorter window than the feature
/// set ideally requires; downstream consumers can distinguish them from
/// fully-windowed results without the pipeline failing outright.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    /// All configured windows were fully available.
    Full,
    /// At least one window was truncated to the available history.
    Degraded,
}
