//! Error types for the Ronda pipeline.
//!
//! Per-symbol failures (`DataUnavailable`, `InsufficientHistory`) are
//! recovered locally by the universe ranker and never abort a batch.
//! `Configuration` is fatal at pipeline construction time.

use thiserror::Error;

/// The main error type for Ronda operations.
#[derive(Debug, Error)]
pub enum RondaError {
    /// A fetch returned no rows or the symbol is unknown upstream.
    ///
    /// The symbol is excluded from ranked output and listed as skipped.
    #[error("No data available for {symbol}: {reason}")]
    DataUnavailable {
        /// The symbol that failed.
        symbol: String,
        /// Provider-supplied reason.
        reason: String,
    },

    /// Too little history to compute anything meaningful for a symbol.
    ///
    /// Feature extraction tolerates a truncated window (flagging degraded
    /// confidence); this variant is raised only below the hard floor.
    #[error("Insufficient history for {symbol}: got {got} bars, need at least {need}")]
    InsufficientHistory {
        /// The symbol that failed.
        symbol: String,
        /// Bars actually available.
        got: usize,
        /// Minimum bars required.
        need: usize,
    },

    /// Invalid model configuration: weights that do not sum to one, an
    /// incomplete band table, a malformed rating table.
    ///
    /// Fatal at construction time, never raised per symbol.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Error during feature computation.
    #[error("Feature computation failed: {0}")]
    Feature(String),

    /// Error writing or parsing an exported report.
    #[error("Export error: {0}")]
    Export(String),

    /// I/O error from report writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for RondaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for RondaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Ronda operations.
pub type Result<T> = std::result::Result<T, RondaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RondaError::DataUnavailable {
            symbol: "XXXX".to_string(),
            reason: "unknown symbol".to_string(),
        };
        assert_eq!(err.to_string(), "No data available for XXXX: unknown symbol");

        let err = RondaError::InsufficientHistory {
            symbol: "AAPL".to_string(),
            got: 1,
            need: 2,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient history for AAPL: got 1 bars, need at least 2"
        );
    }

    #[test]
    fn test_configuration_error() {
        let err = RondaError::Configuration("weights sum to 0.9".to_string());
        assert!(err.to_string().contains("weights sum to 0.9"));
    }

    #[test]
    fn test_error_from_string() {
        let err: RondaError = "fail".into();
        assert!(matches!(err, RondaError::Other(_)));
    }

    #[test]
    fn test_result_type() {
        let ok: Result<i32> = Ok(42);
        assert!(ok.is_ok());
    }
}
