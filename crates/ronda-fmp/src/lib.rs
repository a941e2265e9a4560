//! Financial Modeling Prep (FMP) API client for Ronda.
//!
//! Fetches historical daily prices, financial ratios, growth figures, and
//! company profiles from the [Financial Modeling
//! Prep](https://financialmodelingprep.com/) API, and adapts them into the
//! pipeline's [`MarketSnapshot`](ronda_traits::MarketSnapshot) through the
//! [`MarketDataProvider`](ronda_traits::MarketDataProvider) trait.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ronda_fmp::FmpClient;
//! use ronda_traits::MarketDataProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!     let snapshot = client.fetch("AAPL", 504).await?;
//!     println!("{} bars", snapshot.series.len());
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod provider;
mod types;

pub use client::FmpClient;
pub use error::{FmpError, Result};
pub use types::{CompanyProfile, FinancialGrowth, FinancialRatios, HistoricalPrice, Period};
