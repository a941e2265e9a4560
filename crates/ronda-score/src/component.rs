//! Components: named groups of band rules with a capped point budget.

use ronda_features::{FeatureId, FeatureSet};
use ronda_traits::{Result, RondaError};
use serde::{Deserialize, Serialize};

use crate::band::BandTable;

/// A thematic group of band rules (e.g. "Quality", "Momentum").
///
/// Scoring sums each rule's allocation and caps the total at
/// `max_points`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    name: String,
    max_points: f64,
    rules: Vec<(FeatureId, BandTable)>,
}

impl Component {
    /// Build a component from its band rules.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::Configuration`] when `max_points` is not a
    /// positive finite number, no rules are given, or any rule can award
    /// more than `max_points` on its own.
    pub fn new(
        name: impl Into<String>,
        max_points: f64,
        rules: Vec<(FeatureId, BandTable)>,
    ) -> Result<Self> {
        let name = name.into();
        if !max_points.is_finite() || max_points <= 0.0 {
            return Err(RondaError::Configuration(format!(
                "component '{name}' max_points must be positive, got {max_points}"
            )));
        }
        if rules.is_empty() {
            return Err(RondaError::Configuration(format!(
                "component '{name}' has no band rules"
            )));
        }
        for (feature, table) in &rules {
            if table.max_allocation() > max_points {
                return Err(RondaError::Configuration(format!(
                    "component '{name}' rule {feature:?} can award {} points, above the {max_points} cap",
                    table.max_allocation()
                )));
            }
        }
        Ok(Self {
            name,
            max_points,
            rules,
        })
    }

    /// Component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum points this component can award.
    #[must_use]
    pub const fn max_points(&self) -> f64 {
        self.max_points
    }

    /// The best score any rule combination can reach, before the cap.
    #[must_use]
    pub fn rule_ceiling(&self) -> f64 {
        self.rules.iter().map(|(_, t)| t.max_allocation()).sum()
    }

    /// Score the component against a feature set.
    ///
    /// Deterministic: the same features always produce the same score.
    #[must_use]
    pub fn score(&self, features: &FeatureSet) -> ComponentScore {
        let raw: f64 = self
            .rules
            .iter()
            .map(|(feature, table)| table.lookup(features.get(*feature)))
            .sum();
        ComponentScore {
            name: self.name.clone(),
            points: raw.min(self.max_points),
            max_points: self.max_points,
        }
    }
}

/// A named sub-score, constrained to `[0, max_points]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    /// Component name.
    pub name: String,
    /// Awarded points.
    pub points: f64,
    /// The component's documented maximum.
    pub max_points: f64,
}

impl ComponentScore {
    /// The score normalized to [0, 1].
    #[must_use]
    pub fn normalized(&self) -> f64 {
        ronda_traits::stats::safe_div(self.points, self.max_points, 0.0)
    }
}
