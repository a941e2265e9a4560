//! Per-symbol feature extraction.

use ronda_traits::stats::{autocorrelation, clamp01, mean, safe_div, sample_std, MIN_STD_THRESHOLD};
use ronda_traits::{Confidence, FundamentalSnapshot, Result, RondaError, SymbolTimeSeries};
use serde::{Deserialize, Serialize};

use crate::set::FeatureSet;

/// Trading days per year, used to annualize volatility.
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Configuration for feature extraction.
///
/// Windows shorter than the available history are truncated to the data
/// rather than failing; the resulting [`FeatureSet`] is flagged
/// [`Confidence::Degraded`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Window for volatility, Bollinger bands, and the price z-score
    /// (default: 20 trading days).
    pub stat_window: usize,

    /// Wilder RSI period (default: 14).
    pub rsi_period: usize,

    /// Momentum horizons in trading days (default: 20/60/120).
    pub momentum_horizons: [usize; 3],

    /// Linear weights blending the momentum horizons (default: 0.5/0.3/0.2).
    pub momentum_weights: [f64; 3],

    /// Upper search bound for the factor half-life (default: 30 lags).
    pub half_life_bound: usize,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            stat_window: 20,
            rsi_period: 14,
            momentum_horizons: [20, 60, 120],
            momentum_weights: [0.5, 0.3, 0.2],
            half_life_bound: 30,
        }
    }
}

impl FeatureConfig {
    /// Bars needed for every window to be fully available.
    #[must_use]
    pub fn full_window(&self) -> usize {
        let longest = self
            .momentum_horizons
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
            .max(self.stat_window)
            .max(self.rsi_period);
        longest + 1
    }
}

/// Derives a [`FeatureSet`] from a symbol's bars and fundamentals.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: FeatureConfig,
}

impl FeatureExtractor {
    /// Create an extractor with the given configuration.
    #[must_use]
    pub const fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Extract all features for one symbol.
    ///
    /// Tolerates a series shorter than the ideal windows by computing
    /// sub-window statistics and flagging degraded confidence. Below two
    /// bars there is nothing to compute.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InsufficientHistory`] when fewer than two bars
    /// are available.
    pub fn extract(
        &self,
        series: &SymbolTimeSeries,
        fundamentals: &FundamentalSnapshot,
    ) -> Result<FeatureSet> {
        let closes = series.closes();
        if closes.len() < 2 {
            return Err(RondaError::InsufficientHistory {
                symbol: series.symbol().to_string(),
                got: closes.len(),
                need: 2,
            });
        }

        let returns = series.simple_returns();
        let log_returns = series.log_returns();

        let confidence = if closes.len() >= self.config.full_window() {
            Confidence::Full
        } else {
            Confidence::Degraded
        };

        let autocorr_lag1 = autocorrelation(&returns, 1);
        let reversion_strength = ((-autocorr_lag1).max(0.0) * 100.0).clamp(0.0, 100.0);

        let [m20, m60, m120] = self.config.momentum_horizons.map(|n| momentum(&closes, n));
        let [w20, w60, w120] = self.config.momentum_weights;
        let composite_momentum = w20 * m20 + w60 * m60 + w120 * m120;

        let (bollinger_position, price_zscore) = self.band_features(&closes);

        Ok(FeatureSet {
            annualized_volatility: self.annualized_volatility(&log_returns),
            autocorr_lag1,
            reversion_strength,
            momentum_20: m20,
            momentum_60: m60,
            momentum_120: m120,
            composite_momentum,
            rsi_14: wilder_rsi(&closes, self.config.rsi_period),
            bollinger_position,
            price_zscore,
            half_life: self.half_life(&returns) as f64,
            roe: finite_or_zero(fundamentals.roe),
            debt_to_equity: finite_or_zero(fundamentals.debt_to_equity),
            revenue_growth: finite_or_zero(fundamentals.revenue_growth),
            net_margin: finite_or_zero(fundamentals.net_margin),
            operating_margin: finite_or_zero(fundamentals.operating_margin),
            current_ratio: finite_or_zero(fundamentals.current_ratio),
            bars_used: closes.len(),
            confidence,
        })
    }

    /// Sample std-dev of log returns over the trailing window, annualized
    /// by the square root of 252, in percent.
    fn annualized_volatility(&self, log_returns: &[f64]) -> f64 {
        let window = tail(log_returns, self.config.stat_window);
        sample_std(window) * TRADING_DAYS_PER_YEAR.sqrt() * 100.0
    }

    /// Bollinger position and price z-score over the trailing window.
    ///
    /// A flat window (zero std) puts the price on the band midline: the
    /// position is 0.5 and the z-score exactly 0.
    fn band_features(&self, closes: &[f64]) -> (f64, f64) {
        let window = tail(closes, self.config.stat_window);
        let last = closes[closes.len() - 1];
        let sma = mean(window);
        let std = sample_std(window);

        if std < MIN_STD_THRESHOLD {
            return (0.5, 0.0);
        }

        let upper = sma + 2.0 * std;
        let lower = sma - 2.0 * std;
        let position = clamp01((last - lower) / (upper - lower));
        let zscore = (last - sma) / std;
        (position, zscore)
    }

    /// Smallest lag k > 1 at which the lag-k autocorrelation of returns
    /// first falls to or below half the lag-1 autocorrelation.
    ///
    /// When lag-1 autocorrelation is non-positive, or no such lag exists
    /// within the bound, the bound itself is returned as a conservative
    /// ceiling.
    fn half_life(&self, returns: &[f64]) -> usize {
        let bound = self.config.half_life_bound;
        let lag1 = autocorrelation(returns, 1);
        if lag1 <= 0.0 {
            return bound;
        }
        for k in 2..=bound {
            if autocorrelation(returns, k) <= lag1 / 2.0 {
                return k;
            }
        }
        bound
    }
}

/// Percentage price change over `horizon` bars.
///
/// A series shorter than the horizon falls back to the longest available
/// span, so a young listing still gets a momentum figure (the extractor
/// flags the overall record as degraded).
fn momentum(closes: &[f64], horizon: usize) -> f64 {
    let n = closes.len();
    let span = horizon.min(n - 1);
    if span == 0 {
        return 0.0;
    }
    let start = closes[n - 1 - span];
    safe_div(closes[n - 1] - start, start, 0.0) * 100.0
}

/// Wilder RSI over `period` changes.
///
/// A series with no losses returns 100 and one with no gains returns 0;
/// a flat series sits at the neutral 50. Shorter histories use a simple
/// average over the available changes.
fn wilder_rsi(closes: &[f64], period: usize) -> f64 {
    let changes: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    if changes.is_empty() || period == 0 {
        return 50.0;
    }

    let gains: Vec<f64> = changes.iter().map(|c| c.max(0.0)).collect();
    let losses: Vec<f64> = changes.iter().map(|c| (-c).max(0.0)).collect();

    let (avg_gain, avg_loss) = if changes.len() <= period {
        (mean(&gains), mean(&losses))
    } else {
        // Seed with the first `period` changes, then apply Wilder smoothing.
        let mut avg_gain = mean(&gains[..period]);
        let mut avg_loss = mean(&losses[..period]);
        let p = period as f64;
        for i in period..changes.len() {
            avg_gain = (avg_gain * (p - 1.0) + gains[i]) / p;
            avg_loss = (avg_loss * (p - 1.0) + losses[i]) / p;
        }
        (avg_gain, avg_loss)
    };

    if avg_loss < MIN_STD_THRESHOLD {
        if avg_gain < MIN_STD_THRESHOLD {
            return 50.0;
        }
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// Trailing `window` elements of a slice, or the whole slice if shorter.
fn tail(values: &[f64], window: usize) -> &[f64] {
    &values[values.len().saturating_sub(window)..]
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ronda_traits::{Bar, Date};

    fn series_from_closes(closes: &[f64]) -> SymbolTimeSeries {
        let start = Date::from_ymd_opt(2024, 1, 1).unwrap();
        let bars: Vec<Bar> = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                date: start + chrono::Days::new(i as u64),
                open: close,
                high: close * 1.01,
                low: close * 0.99,
                close,
                volume: 1_000.0,
            })
            .collect();
        SymbolTimeSeries::new("TEST", bars).unwrap()
    }

    fn extract(closes: &[f64]) -> FeatureSet {
        FeatureExtractor::default()
            .extract(&series_from_closes(closes), &FundamentalSnapshot::default())
            .unwrap()
    }

    #[test]
    fn test_single_bar_is_insufficient() {
        let result = FeatureExtractor::default().extract(
            &series_from_closes(&[100.0]),
            &FundamentalSnapshot::default(),
        );
        assert!(matches!(
            result,
            Err(RondaError::InsufficientHistory { got: 1, need: 2, .. })
        ));
    }

    #[test]
    fn test_flat_window_is_neutral() {
        let features = extract(&[100.0; 30]);
        assert_eq!(features.price_zscore, 0.0);
        assert_eq!(features.bollinger_position, 0.5);
        assert_eq!(features.annualized_volatility, 0.0);
        assert_eq!(features.rsi_14, 50.0);
        assert_eq!(features.momentum_20, 0.0);
        assert!(features.all_finite());
    }

    #[test]
    fn test_monotonic_riser_rsi_is_100() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let features = extract(&closes);
        assert_relative_eq!(features.rsi_14, 100.0);
    }

    #[test]
    fn test_monotonic_faller_rsi_is_0() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
        let features = extract(&closes);
        assert_relative_eq!(features.rsi_14, 0.0);
    }

    #[test]
    fn test_momentum_exact() {
        // 121 bars so every horizon is fully available.
        let mut closes = vec![100.0; 121];
        let n = closes.len();
        closes[n - 21] = 80.0; // 20 bars back
        let features = extract(&closes);
        assert_relative_eq!(features.momentum_20, (100.0 - 80.0) / 80.0 * 100.0);
        assert_eq!(features.confidence, Confidence::Full);
    }

    #[test]
    fn test_momentum_short_series_falls_back() {
        // 10 bars cannot cover a 20-bar horizon; the full span is used.
        let closes: Vec<f64> = vec![100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0, 107.0, 108.0, 110.0];
        let features = extract(&closes);
        assert_relative_eq!(features.momentum_20, 10.0);
        assert_eq!(features.confidence, Confidence::Degraded);
    }

    #[test]
    fn test_composite_momentum_blend() {
        let closes: Vec<f64> = (0..130).map(|i| 100.0 * 1.001f64.powi(i)).collect();
        let features = extract(&closes);
        let expected = 0.5 * features.momentum_20
            + 0.3 * features.momentum_60
            + 0.2 * features.momentum_120;
        assert_relative_eq!(features.composite_momentum, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_reversion_strength_on_alternating_series() {
        // Alternating +1%/-1% closes produce strongly negative lag-1
        // autocorrelation, hence high reversion strength.
        let mut closes = Vec::with_capacity(60);
        let mut price = 100.0;
        for i in 0..60 {
            price *= if i % 2 == 0 { 1.01 } else { 0.99 };
            closes.push(price);
        }
        let features = extract(&closes);
        assert!(features.autocorr_lag1 < -0.9);
        assert!(features.reversion_strength > 90.0);
        assert!(features.reversion_strength <= 100.0);
    }

    #[test]
    fn test_trending_series_has_low_reversion() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 * 1.002f64.powi(i)).collect();
        let features = extract(&closes);
        assert_eq!(features.reversion_strength, 0.0);
    }

    #[test]
    fn test_half_life_bound_when_no_persistence() {
        // Alternating series: negative lag-1 autocorrelation maps to the
        // conservative ceiling.
        let mut closes = Vec::new();
        let mut price = 100.0;
        for i in 0..80 {
            price *= if i % 2 == 0 { 1.01 } else { 0.99 };
            closes.push(price);
        }
        let features = extract(&closes);
        assert_eq!(features.half_life, 30.0);
    }

    #[test]
    fn test_bollinger_position_clipped() {
        // A big final spike sits above the upper band and clips to 1.0.
        let mut closes = vec![100.0; 25];
        for (i, c) in closes.iter_mut().enumerate() {
            *c += (i % 3) as f64 * 0.5;
        }
        closes.push(150.0);
        let features = extract(&closes);
        assert_eq!(features.bollinger_position, 1.0);
        assert!(features.price_zscore > 2.0);
    }

    #[test]
    fn test_nonfinite_fundamentals_neutralized() {
        let fundamentals = FundamentalSnapshot {
            roe: f64::NAN,
            debt_to_equity: f64::INFINITY,
            ..Default::default()
        };
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let features = FeatureExtractor::default()
            .extract(&series_from_closes(&closes), &fundamentals)
            .unwrap();
        assert_eq!(features.roe, 0.0);
        assert_eq!(features.debt_to_equity, 0.0);
    }

    #[test]
    fn test_full_window_requirement() {
        let config = FeatureConfig::default();
        assert_eq!(config.full_window(), 121);
    }
}
