#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # ronda
//!
//! Composite factor scoring pipeline for equity universes.
//!
//! ronda is an umbrella crate that re-exports all ronda sub-crates for
//! convenience.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ronda::fmp::FmpClient;
//! use ronda::rank::{report, UniverseRanker};
//! use ronda::score::create_model;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = FmpClient::from_env()?;
//!     let model = create_model("quality_momentum")?;
//!     let ranker = UniverseRanker::new(provider, model);
//!
//!     let universe = vec!["AAPL".to_string(), "MSFT".to_string()];
//!     let outcome = ranker.run(&universe).await;
//!     println!("{}", report::render_text(&outcome, 10));
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types, errors, and the provider contract
//! - [`features`] - Per-symbol feature extraction
//! - [`score`] - Band tables, model specifications, composite aggregation
//! - [`rank`] - Universe ranking, summaries, and report export
//! - [`fmp`] - Financial Modeling Prep data client
//!
//! ## Architecture
//!
//! 1. A **provider** fetches bars and fundamentals per symbol
//! 2. The **feature extractor** derives a fixed-key feature record
//! 3. **Components** score feature groups through threshold bands
//! 4. The **model** aggregates a weighted composite and a rating
//! 5. The **ranker** sorts the universe and exports reports

/// Core types, errors, and the provider contract.
pub use ronda_traits as traits;

/// Per-symbol feature extraction.
pub use ronda_features as features;

/// Band tables, model specifications, and composite aggregation.
pub use ronda_score as score;

/// Universe ranking, summaries, and report export.
pub use ronda_rank as rank;

/// Financial Modeling Prep data client.
pub use ronda_fmp as fmp;

pub use ronda_traits::{Result, RondaError};
