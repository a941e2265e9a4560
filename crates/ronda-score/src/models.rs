//! Built-in model specifications.
//!
//! Threshold bands here are configuration defaults carried over from the
//! published models, not derived constants. Each constructor builds a
//! fully validated [`ModelSpec`]; construction only fails if the tables
//! themselves are edited into an invalid state, so failures surface
//! immediately in tests rather than at runtime.

use ronda_features::FeatureId;
use ronda_traits::Result;

use crate::band::BandTable;
use crate::component::Component;
use crate::model::{ModelSpec, RatingTable};

/// Quality + momentum selection model.
///
/// Components: Quality (fundamental ratios, 25 pts), Momentum (blended
/// price momentum and RSI with the 45-65 optimal band, 25 pts), Trend
/// (Bollinger position and volatility, 20 pts). Weights 0.40/0.35/0.25.
pub fn quality_momentum() -> Result<ModelSpec> {
    let quality = Component::new(
        "Quality",
        25.0,
        vec![
            (
                FeatureId::Roe,
                BandTable::new(&[(0.05, 0.0), (0.10, 3.0), (0.20, 6.0)], 8.0)?,
            ),
            (
                FeatureId::DebtToEquity,
                BandTable::new(&[(0.5, 7.0), (1.0, 5.0), (2.0, 2.0)], 0.0)?,
            ),
            (
                FeatureId::RevenueGrowth,
                BandTable::new(&[(0.0, 0.0), (0.05, 2.0), (0.15, 4.0)], 5.0)?,
            ),
            (
                FeatureId::NetMargin,
                BandTable::new(&[(0.0, 0.0), (0.08, 2.0), (0.15, 3.0)], 5.0)?,
            ),
        ],
    )?;

    let momentum = Component::new(
        "Momentum",
        25.0,
        vec![
            (
                FeatureId::CompositeMomentum,
                BandTable::new(&[(-10.0, 0.0), (0.0, 4.0), (8.0, 8.0), (20.0, 12.0)], 15.0)?,
            ),
            (
                FeatureId::Rsi14,
                BandTable::new(&[(30.0, 2.0), (45.0, 6.0), (65.0, 10.0), (75.0, 6.0)], 2.0)?,
            ),
        ],
    )?;

    let trend = Component::new(
        "Trend",
        20.0,
        vec![
            (
                FeatureId::BollingerPosition,
                BandTable::new(&[(0.2, 2.0), (0.5, 4.0), (0.85, 8.0)], 6.0)?,
            ),
            (
                FeatureId::AnnualizedVolatility,
                BandTable::new(&[(15.0, 12.0), (25.0, 9.0), (40.0, 5.0), (60.0, 2.0)], 0.0)?,
            ),
        ],
    )?;

    ModelSpec::new(
        "quality_momentum",
        "Quality fundamentals blended with price momentum",
        vec![quality, momentum, trend],
        vec![0.40, 0.35, 0.25],
        RatingTable::standard(),
    )
}

/// Trend strength model.
///
/// Components: Trend (momentum horizons, 30 pts), Persistence (lag-1
/// autocorrelation and half-life, 25 pts), Stability (volatility bands,
/// 20 pts). Weights 0.50/0.30/0.20.
pub fn trend_strength() -> Result<ModelSpec> {
    let trend = Component::new(
        "Trend",
        30.0,
        vec![
            (
                FeatureId::Momentum20,
                BandTable::new(&[(0.0, 0.0), (5.0, 3.0), (12.0, 6.0)], 8.0)?,
            ),
            (
                FeatureId::Momentum60,
                BandTable::new(&[(0.0, 0.0), (10.0, 4.0), (25.0, 8.0)], 10.0)?,
            ),
            (
                FeatureId::Momentum120,
                BandTable::new(&[(0.0, 0.0), (15.0, 5.0), (40.0, 9.0)], 12.0)?,
            ),
        ],
    )?;

    let persistence = Component::new(
        "Persistence",
        25.0,
        vec![
            (
                FeatureId::AutocorrLag1,
                BandTable::new(&[(-0.1, 0.0), (0.05, 4.0), (0.2, 9.0)], 13.0)?,
            ),
            (
                FeatureId::HalfLife,
                BandTable::new(&[(5.0, 2.0), (12.0, 6.0), (25.0, 9.0)], 12.0)?,
            ),
        ],
    )?;

    let stability = Component::new(
        "Stability",
        20.0,
        vec![(
            FeatureId::AnnualizedVolatility,
            BandTable::new(&[(20.0, 20.0), (35.0, 13.0), (55.0, 6.0)], 0.0)?,
        )],
    )?;

    ModelSpec::new(
        "trend_strength",
        "Multi-horizon trend persistence and stability",
        vec![trend, persistence, stability],
        vec![0.50, 0.30, 0.20],
        RatingTable::standard(),
    )
}

/// Mean reversion / factor decay model.
///
/// Components: Reversion (reversion strength, 30 pts), Decay (half-life,
/// shorter is better, 25 pts), Oscillator (RSI, Bollinger, and z-score
/// extremes, 25 pts). Weights 0.40/0.30/0.30.
pub fn mean_reversion() -> Result<ModelSpec> {
    let reversion = Component::new(
        "Reversion",
        30.0,
        vec![(
            FeatureId::ReversionStrength,
            BandTable::new(
                &[(5.0, 0.0), (15.0, 8.0), (35.0, 16.0), (60.0, 24.0)],
                30.0,
            )?,
        )],
    )?;

    let decay = Component::new(
        "Decay",
        25.0,
        vec![(
            FeatureId::HalfLife,
            BandTable::new(&[(4.0, 25.0), (8.0, 18.0), (15.0, 10.0), (25.0, 4.0)], 0.0)?,
        )],
    )?;

    let oscillator = Component::new(
        "Oscillator",
        25.0,
        vec![
            (
                FeatureId::Rsi14,
                BandTable::new(
                    &[(25.0, 10.0), (40.0, 6.0), (60.0, 2.0), (75.0, 6.0)],
                    10.0,
                )?,
            ),
            (
                FeatureId::BollingerPosition,
                BandTable::new(&[(0.1, 9.0), (0.3, 5.0), (0.7, 1.0), (0.9, 5.0)], 9.0)?,
            ),
            (
                FeatureId::PriceZScore,
                BandTable::new(&[(-2.0, 6.0), (-1.0, 4.0), (1.0, 0.0), (2.0, 4.0)], 6.0)?,
            ),
        ],
    )?;

    ModelSpec::new(
        "mean_reversion",
        "Short-horizon reversion with fast factor decay",
        vec![reversion, decay, oscillator],
        vec![0.40, 0.30, 0.30],
        RatingTable::standard(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ronda_features::FeatureSet;
    use ronda_traits::Confidence;

    fn all_models() -> Vec<ModelSpec> {
        vec![
            quality_momentum().unwrap(),
            trend_strength().unwrap(),
            mean_reversion().unwrap(),
        ]
    }

    fn neutral_features() -> FeatureSet {
        FeatureSet {
            annualized_volatility: 25.0,
            autocorr_lag1: 0.0,
            reversion_strength: 0.0,
            momentum_20: 0.0,
            momentum_60: 0.0,
            momentum_120: 0.0,
            composite_momentum: 0.0,
            rsi_14: 50.0,
            bollinger_position: 0.5,
            price_zscore: 0.0,
            half_life: 30.0,
            roe: 0.0,
            debt_to_equity: 0.0,
            revenue_growth: 0.0,
            net_margin: 0.0,
            operating_margin: 0.0,
            current_ratio: 1.0,
            bars_used: 252,
            confidence: Confidence::Full,
        }
    }

    #[test]
    fn test_builtin_models_construct() {
        for model in all_models() {
            assert!(!model.name().is_empty());
            assert_relative_eq!(model.weights().sum(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_builtin_composites_in_range() {
        for model in all_models() {
            let score = model.aggregate(&neutral_features());
            assert!(
                (0.0..=1.0).contains(&score.composite),
                "{} composite {} out of range",
                model.name(),
                score.composite
            );
            for cs in &score.components {
                assert!(cs.points >= 0.0 && cs.points <= cs.max_points);
            }
        }
    }

    #[test]
    fn test_quality_momentum_rewards_strong_profile() {
        let model = quality_momentum().unwrap();
        let strong = FeatureSet {
            annualized_volatility: 14.0,
            composite_momentum: 22.0,
            rsi_14: 55.0,
            bollinger_position: 0.7,
            roe: 0.28,
            debt_to_equity: 0.3,
            revenue_growth: 0.2,
            net_margin: 0.22,
            ..neutral_features()
        };
        let weak = FeatureSet {
            annualized_volatility: 70.0,
            composite_momentum: -15.0,
            rsi_14: 20.0,
            bollinger_position: 0.05,
            roe: -0.1,
            debt_to_equity: 3.0,
            revenue_growth: -0.1,
            net_margin: -0.05,
            ..neutral_features()
        };
        let strong_score = model.aggregate(&strong);
        let weak_score = model.aggregate(&weak);
        assert!(strong_score.composite > weak_score.composite);
        assert_relative_eq!(strong_score.composite, 1.0);
    }

    #[test]
    fn test_mean_reversion_rewards_fast_decay() {
        let model = mean_reversion().unwrap();
        let reverter = FeatureSet {
            reversion_strength: 70.0,
            half_life: 3.0,
            rsi_14: 18.0,
            bollinger_position: 0.05,
            ..neutral_features()
        };
        let trender = FeatureSet {
            reversion_strength: 0.0,
            half_life: 30.0,
            rsi_14: 50.0,
            bollinger_position: 0.5,
            ..neutral_features()
        };
        assert!(model.aggregate(&reverter).composite > model.aggregate(&trender).composite);
    }

    #[test]
    fn test_trend_strength_rewards_persistent_uptrend() {
        let model = trend_strength().unwrap();
        let trender = FeatureSet {
            momentum_20: 13.0,
            momentum_60: 26.0,
            momentum_120: 45.0,
            autocorr_lag1: 0.25,
            half_life: 28.0,
            annualized_volatility: 18.0,
            ..neutral_features()
        };
        let score = model.aggregate(&trender);
        assert_relative_eq!(score.composite, 1.0);
        assert_eq!(score.rating, crate::model::Rating::Excellent);
    }
}
