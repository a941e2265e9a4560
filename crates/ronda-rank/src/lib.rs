#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Universe ranking and report export.
//!
//! Runs the fetch → extract → score pipeline over a fixed universe of
//! symbols with partial-failure tolerance: a symbol whose fetch fails is
//! recorded as skipped with a reason and the batch continues. Results are
//! sorted only after the whole batch completes, ranks assigned 1..N, and
//! summary statistics computed. Exports: CSV (stable column order), JSON,
//! and a human-readable text report.

pub mod fixture;
pub mod ranker;
pub mod report;
pub mod result;
pub mod summary;

pub use fixture::FixtureProvider;
pub use ranker::{RankerConfig, UniverseRanker};
pub use result::{CompositeResult, RunOutcome, SkipReason, SkippedSymbol};
pub use summary::{ComponentLeader, ComponentStat, RunSummary, SectorStat};
