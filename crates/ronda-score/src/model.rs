//! Model specifications: components, weights, and rating thresholds.

use derive_more::Display;
use ndarray::Array1;
use ronda_features::FeatureSet;
use ronda_traits::{Result, RondaError};
use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentScore};

/// Tolerance for the weight-sum invariant.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Categorical label derived from the composite score.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rating {
    /// Composite in the top band.
    Excellent,
    /// Strong composite.
    Strong,
    /// Mid-range composite.
    Neutral,
    /// Weak composite.
    Weak,
    /// Bottom band.
    Poor,
}

impl Rating {
    /// Parse a rating label back from its display form.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Excellent" => Some(Self::Excellent),
            "Strong" => Some(Self::Strong),
            "Neutral" => Some(Self::Neutral),
            "Weak" => Some(Self::Weak),
            "Poor" => Some(Self::Poor),
            _ => None,
        }
    }
}

/// Ordered rating thresholds over the composite range [0, 1].
///
/// Each entry is the inclusive lower bound of a half-open band
/// `[low, next_low)`; the top band is closed on the right at 1.0. The last
/// entry must have a lower bound of 0.0 so the table is exhaustive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingTable {
    bands: Vec<(f64, Rating)>,
}

impl RatingTable {
    /// Build a rating table from `(lower_bound, rating)` pairs, highest
    /// band first.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::Configuration`] when the table is empty, the
    /// bounds are not strictly decreasing within [0, 1], or the final
    /// bound is not 0.0.
    pub fn new(bands: Vec<(f64, Rating)>) -> Result<Self> {
        if bands.is_empty() {
            return Err(RondaError::Configuration(
                "rating table is empty".to_string(),
            ));
        }
        for window in bands.windows(2) {
            if window[1].0 >= window[0].0 {
                return Err(RondaError::Configuration(format!(
                    "rating bounds must be strictly decreasing: {} then {}",
                    window[0].0, window[1].0
                )));
            }
        }
        let first = bands[0].0;
        let last = bands[bands.len() - 1].0;
        if !(0.0..=1.0).contains(&first) {
            return Err(RondaError::Configuration(format!(
                "rating bounds must lie in [0, 1], got {first}"
            )));
        }
        if last != 0.0 {
            return Err(RondaError::Configuration(format!(
                "rating table must end at 0.0 to cover the range, ends at {last}"
            )));
        }
        Ok(Self { bands })
    }

    /// The default five-band table shared by the built-in models.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bands: vec![
                (0.80, Rating::Excellent),
                (0.70, Rating::Strong),
                (0.55, Rating::Neutral),
                (0.40, Rating::Weak),
                (0.00, Rating::Poor),
            ],
        }
    }

    /// Classify a composite score. Idempotent: the same score always maps
    /// to the same rating.
    #[must_use]
    pub fn classify(&self, composite: f64) -> Rating {
        for (low, rating) in &self.bands {
            if composite >= *low {
                return *rating;
            }
        }
        // Exhaustive by construction; negative input falls to the bottom.
        self.bands[self.bands.len() - 1].1
    }
}

/// Everything a model run produces for one symbol before ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelScore {
    /// Component scores in model order.
    pub components: Vec<ComponentScore>,
    /// Weighted composite in [0, 1].
    pub composite: f64,
    /// Rating derived from the composite.
    pub rating: Rating,
}

/// An immutable model definition: components, their weights, and the
/// rating thresholds.
///
/// Constructed once at startup and passed into the pipeline; the free
/// threshold constants of the source models live here as explicit
/// configuration.
#[derive(Debug, Clone)]
pub struct ModelSpec {
    name: String,
    description: String,
    components: Vec<Component>,
    weights: Array1<f64>,
    rating_table: RatingTable,
}

impl ModelSpec {
    /// Build and validate a model specification.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::Configuration`] when `weights` and
    /// `components` differ in length, a weight is non-positive or
    /// non-finite, or the weights do not sum to 1.0 within
    /// [`WEIGHT_TOLERANCE`]. Weights are never silently renormalized.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        components: Vec<Component>,
        weights: Vec<f64>,
        rating_table: RatingTable,
    ) -> Result<Self> {
        let name = name.into();
        if components.is_empty() {
            return Err(RondaError::Configuration(format!(
                "model '{name}' has no components"
            )));
        }
        if components.len() != weights.len() {
            return Err(RondaError::Configuration(format!(
                "model '{name}' has {} components but {} weights",
                components.len(),
                weights.len()
            )));
        }
        for &w in &weights {
            if !w.is_finite() || w <= 0.0 {
                return Err(RondaError::Configuration(format!(
                    "model '{name}' weight {w} must be positive and finite"
                )));
            }
        }
        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(RondaError::Configuration(format!(
                "model '{name}' weights sum to {total}, expected 1.0"
            )));
        }
        Ok(Self {
            name,
            description: description.into(),
            components,
            weights: Array1::from_vec(weights),
            rating_table,
        })
    }

    /// Model name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Components in model order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Component names in model order, for report headers.
    #[must_use]
    pub fn component_names(&self) -> Vec<&str> {
        self.components.iter().map(Component::name).collect()
    }

    /// The weight vector.
    #[must_use]
    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    /// The rating thresholds.
    #[must_use]
    pub const fn rating_table(&self) -> &RatingTable {
        &self.rating_table
    }

    /// Score every component and aggregate the weighted composite.
    ///
    /// The composite is the dot product of normalized component scores
    /// with the weight vector; a clamp guards float dust at the edges of
    /// [0, 1].
    #[must_use]
    pub fn aggregate(&self, features: &FeatureSet) -> ModelScore {
        let components: Vec<ComponentScore> =
            self.components.iter().map(|c| c.score(features)).collect();
        let normalized = Array1::from_iter(components.iter().map(ComponentScore::normalized));
        let composite = normalized.dot(&self.weights).clamp(0.0, 1.0);
        let rating = self.rating_table.classify(composite);
        ModelScore {
            components,
            composite,
            rating,
        }
    }
}
