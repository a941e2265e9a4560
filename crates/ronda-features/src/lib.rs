#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Feature extraction for the Ronda scoring pipeline.
//!
//! Derives a closed, fixed-key [`FeatureSet`] from a symbol's time series
//! and fundamentals: rolling volatility, autocorrelation and reversion
//! strength, multi-horizon momentum, Wilder RSI, Bollinger position, price
//! z-score, and factor half-life. All values are finite by construction;
//! degenerate windows resolve to the defaults documented in
//! [`ronda_traits::stats`].

pub mod extractor;
pub mod set;

pub use extractor::{FeatureConfig, FeatureExtractor};
pub use set::{FeatureId, FeatureSet};
