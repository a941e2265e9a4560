//! Per-symbol results and run outcomes.

use ronda_features::FeatureSet;
use ronda_score::{ComponentScore, Rating};
use ronda_traits::{Confidence, RondaError, Symbol};
use serde::{Deserialize, Serialize};

use crate::summary::RunSummary;

/// One scored symbol. Created once per run and never mutated afterwards;
/// `rank` is assigned when the sorted order is final.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeResult {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Sector name, when the provider supplied one.
    pub sector: Option<String>,
    /// Component scores in model order.
    pub components: Vec<ComponentScore>,
    /// Weighted composite score in [0, 1].
    pub composite: f64,
    /// Rating derived from the composite.
    pub rating: Rating,
    /// Position in the sorted universe, 1-based.
    pub rank: usize,
    /// Feature extraction confidence.
    pub confidence: Confidence,
    /// The raw features behind the scores, for report columns.
    pub features: FeatureSet,
}

/// Why a symbol was left out of the ranked output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The fetch returned no rows or the symbol is unknown upstream.
    DataUnavailable,
    /// Not enough bars to compute anything.
    InsufficientHistory,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataUnavailable => write!(f, "DataUnavailable"),
            Self::InsufficientHistory => write!(f, "InsufficientHistory"),
        }
    }
}

/// A symbol excluded from the ranked output, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedSymbol {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Why it was skipped.
    pub reason: SkipReason,
    /// Provider or extractor detail for the run summary.
    pub detail: String,
}

impl SkippedSymbol {
    /// Classify a per-symbol error into a skip record.
    ///
    /// Configuration errors never reach this path; they fail pipeline
    /// construction. Anything that is not an explicit history shortfall
    /// counts as unavailable data.
    #[must_use]
    pub fn from_error(symbol: &str, error: &RondaError) -> Self {
        let reason = match error {
            RondaError::InsufficientHistory { .. } => SkipReason::InsufficientHistory,
            _ => SkipReason::DataUnavailable,
        };
        Self {
            symbol: symbol.to_string(),
            reason,
            detail: error.to_string(),
        }
    }
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Name of the model that produced the run.
    pub model: String,
    /// Ranked results, best composite first.
    pub results: Vec<CompositeResult>,
    /// Symbols excluded from ranking, in universe order.
    pub skipped: Vec<SkippedSymbol>,
    /// Distribution and leader statistics.
    pub summary: RunSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_from_error() {
        let err = RondaError::DataUnavailable {
            symbol: "XXXX".to_string(),
            reason: "unknown symbol".to_string(),
        };
        let skipped = SkippedSymbol::from_error("XXXX", &err);
        assert_eq!(skipped.reason, SkipReason::DataUnavailable);
        assert!(skipped.detail.contains("unknown symbol"));

        let err = RondaError::InsufficientHistory {
            symbol: "NEWCO".to_string(),
            got: 1,
            need: 2,
        };
        let skipped = SkippedSymbol::from_error("NEWCO", &err);
        assert_eq!(skipped.reason, SkipReason::InsufficientHistory);
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::DataUnavailable.to_string(), "DataUnavailable");
        assert_eq!(
            SkipReason::InsufficientHistory.to_string(),
            "InsufficientHistory"
        );
    }
}
