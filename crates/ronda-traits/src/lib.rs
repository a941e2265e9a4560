#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core type definitions for the Ronda composite scoring pipeline.
//!
//! This crate provides the foundational abstractions shared by the feature
//! extractor, component scorers, and the universe ranker: the per-symbol
//! market data model, the error taxonomy, and the data-provider contract.

/// The version of the ronda-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod provider;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{Result, RondaError};
pub use provider::{MarketDataProvider, MarketSnapshot};
pub use types::{Bar, Confidence, Date, FundamentalSnapshot, Symbol, SymbolTimeSeries};
