//! The fixed-key feature record and its lookup keys.
//!
//! Feature names are a closed enum rather than string keys in an ad hoc
//! map, so a band rule referencing a feature that does not exist is
//! unrepresentable.

use ronda_traits::Confidence;
use serde::{Deserialize, Serialize};

/// Identifies one field of a [`FeatureSet`].
///
/// Band rules in the scoring layer select their input feature through this
/// enum; the mapping to a value is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureId {
    /// Annualized volatility of log returns, in percent.
    AnnualizedVolatility,
    /// Lag-1 autocorrelation of returns, in [-1, 1].
    AutocorrLag1,
    /// Mean-reversion strength, in [0, 100].
    ReversionStrength,
    /// 20-day momentum, in percent.
    Momentum20,
    /// 60-day momentum, in percent.
    Momentum60,
    /// 120-day momentum, in percent.
    Momentum120,
    /// Weighted multi-horizon momentum, in percent.
    CompositeMomentum,
    /// Wilder RSI over 14 periods, in [0, 100].
    Rsi14,
    /// Position inside the Bollinger band, in [0, 1].
    BollingerPosition,
    /// Close price z-score against the 20-day window.
    PriceZScore,
    /// Factor half-life in trading days.
    HalfLife,
    /// Return on equity (fundamental).
    Roe,
    /// Debt to equity (fundamental).
    DebtToEquity,
    /// Revenue growth (fundamental).
    RevenueGrowth,
    /// Net profit margin (fundamental).
    NetMargin,
    /// Operating margin (fundamental).
    OperatingMargin,
    /// Current ratio (fundamental).
    CurrentRatio,
}

/// Derived numeric features for one symbol, computed once per run.
///
/// Every value is finite; the extractor substitutes documented defaults
/// for degenerate calculations before this record is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Annualized volatility of log returns, percent.
    pub annualized_volatility: f64,
    /// Lag-1 autocorrelation of simple returns.
    pub autocorr_lag1: f64,
    /// `max(0, -autocorr_lag1) * 100`, clipped to [0, 100].
    pub reversion_strength: f64,
    /// 20-day price momentum, percent.
    pub momentum_20: f64,
    /// 60-day price momentum, percent.
    pub momentum_60: f64,
    /// 120-day price momentum, percent.
    pub momentum_120: f64,
    /// 0.5/0.3/0.2-weighted blend of the three momentum horizons.
    pub composite_momentum: f64,
    /// Wilder RSI(14).
    pub rsi_14: f64,
    /// Close position inside the 20-day Bollinger band, [0, 1].
    pub bollinger_position: f64,
    /// Close z-score against the 20-day mean and std.
    pub price_zscore: f64,
    /// Smallest lag at which return autocorrelation halves, capped.
    pub half_life: f64,
    /// Return on equity, from fundamentals.
    pub roe: f64,
    /// Debt to equity, from fundamentals.
    pub debt_to_equity: f64,
    /// Revenue growth, from fundamentals.
    pub revenue_growth: f64,
    /// Net margin, from fundamentals.
    pub net_margin: f64,
    /// Operating margin, from fundamentals.
    pub operating_margin: f64,
    /// Current ratio, from fundamentals.
    pub current_ratio: f64,
    /// Bars actually used for extraction.
    pub bars_used: usize,
    /// Whether every configured window was fully available.
    pub confidence: Confidence,
}

impl FeatureSet {
    /// Look up a feature value by id. Total over [`FeatureId`].
    #[must_use]
    pub const fn get(&self, id: FeatureId) -> f64 {
        match id {
            FeatureId::AnnualizedVolatility => self.annualized_volatility,
            FeatureId::AutocorrLag1 => self.autocorr_lag1,
            FeatureId::ReversionStrength => self.reversion_strength,
            FeatureId::Momentum20 => self.momentum_20,
            FeatureId::Momentum60 => self.momentum_60,
            FeatureId::Momentum120 => self.momentum_120,
            FeatureId::CompositeMomentum => self.composite_momentum,
            FeatureId::Rsi14 => self.rsi_14,
            FeatureId::BollingerPosition => self.bollinger_position,
            FeatureId::PriceZScore => self.price_zscore,
            FeatureId::HalfLife => self.half_life,
            FeatureId::Roe => self.roe,
            FeatureId::DebtToEquity => self.debt_to_equity,
            FeatureId::RevenueGrowth => self.revenue_growth,
            FeatureId::NetMargin => self.net_margin,
            FeatureId::OperatingMargin => self.operating_margin,
            FeatureId::CurrentRatio => self.current_ratio,
        }
    }

    /// True when every value in the record is finite.
    #[must_use]
    pub fn all_finite(&self) -> bool {
        const ALL: [FeatureId; 17] = [
            FeatureId::AnnualizedVolatility,
            FeatureId::AutocorrLag1,
            FeatureId::ReversionStrength,
            FeatureId::Momentum20,
            FeatureId::Momentum60,
            FeatureId::Momentum120,
            FeatureId::CompositeMomentum,
            FeatureId::Rsi14,
            FeatureId::BollingerPosition,
            FeatureId::PriceZScore,
            FeatureId::HalfLife,
            FeatureId::Roe,
            FeatureId::DebtToEquity,
            FeatureId::RevenueGrowth,
            FeatureId::NetMargin,
            FeatureId::OperatingMargin,
            FeatureId::CurrentRatio,
        ];
        ALL.iter().all(|id| self.get(*id).is_finite())
    }
}
