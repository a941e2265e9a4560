//! Threshold band tables.
//!
//! A band table is a step function over the whole real line: ordered
//! upper bounds carve half-open intervals `[prev, bound)`, each with a
//! fixed point allocation, and a terminal allocation catches everything at
//! or above the last bound. There is no interpolation between bands.

use ronda_traits::{Result, RondaError};
use serde::{Deserialize, Serialize};

/// An exhaustive, ordered set of threshold bands mapping a feature value
/// to a point allocation.
///
/// The table's shape encodes the model's preference: ascending allocations
/// reward high values, descending ones reward low values, and hump-shaped
/// tables reward a mid-range optimum (e.g. RSI 45-65).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandTable {
    /// Strictly increasing exclusive upper bounds.
    bounds: Vec<f64>,
    /// Allocation per band; `points[i]` applies below `bounds[i]`.
    points: Vec<f64>,
    /// Allocation for values at or above the last bound.
    terminal: f64,
}

impl BandTable {
    /// Build a band table from `(upper_bound, points)` pairs plus the
    /// terminal allocation for values at or above the last bound.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::Configuration`] when the table is empty, a
    /// bound or allocation is non-finite, an allocation is negative, or
    /// the bounds are not strictly increasing.
    pub fn new(bands: &[(f64, f64)], terminal: f64) -> Result<Self> {
        if bands.is_empty() {
            return Err(RondaError::Configuration(
                "band table needs at least one bound".to_string(),
            ));
        }
        if !terminal.is_finite() || terminal < 0.0 {
            return Err(RondaError::Configuration(format!(
                "terminal allocation must be finite and non-negative, got {terminal}"
            )));
        }
        for window in bands.windows(2) {
            if window[1].0 <= window[0].0 {
                return Err(RondaError::Configuration(format!(
                    "band bounds must be strictly increasing: {} then {}",
                    window[0].0, window[1].0
                )));
            }
        }
        for &(bound, points) in bands {
            if !bound.is_finite() {
                return Err(RondaError::Configuration(
                    "band bound must be finite".to_string(),
                ));
            }
            if !points.is_finite() || points < 0.0 {
                return Err(RondaError::Configuration(format!(
                    "band allocation must be finite and non-negative, got {points}"
                )));
            }
        }
        Ok(Self {
            bounds: bands.iter().map(|b| b.0).collect(),
            points: bands.iter().map(|b| b.1).collect(),
            terminal,
        })
    }

    /// Points awarded for `value`. Total over the reals: every finite
    /// value falls in exactly one band; non-finite input (which the
    /// feature extractor never produces) lands in the terminal band.
    #[must_use]
    pub fn lookup(&self, value: f64) -> f64 {
        if value.is_finite() {
            for (bound, points) in self.bounds.iter().zip(self.points.iter()) {
                if value < *bound {
                    return *points;
                }
            }
        }
        self.terminal
    }

    /// The largest allocation any value can earn from this table.
    #[must_use]
    pub fn max_allocation(&self) -> f64 {
        self.points
            .iter()
            .copied()
            .fold(self.terminal, f64::max)
    }

    /// Number of bands, including the terminal one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.len() + 1
    }

    /// A band table always has at least two bands.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}
