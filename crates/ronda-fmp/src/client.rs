//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    types::{CompanyProfile, FinancialGrowth, FinancialRatios, HistoricalPrice, Period},
};
use reqwest::Client;
use std::env;

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        log::debug!("GET {endpoint}");
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // Check for error responses
        if text.contains("\"Error Message\"") || text.contains("\"error\"") {
            return Err(FmpError::Api(text));
        }

        serde_json::from_str(&text).map_err(|e| {
            FmpError::Json(serde_json::Error::io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse: {e}. Response: {text}"),
            )))
        })
    }

    /// Get historical daily prices for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Stock ticker symbol (e.g., "AAPL")
    /// * `from` - Start date (YYYY-MM-DD)
    /// * `to` - End date (YYYY-MM-DD)
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn historical_prices(
        &self,
        symbol: &str,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Vec<HistoricalPrice>> {
        let mut params = String::new();
        if let Some(f) = from {
            params.push_str(&format!("&from={f}"));
        }
        if let Some(t) = to {
            params.push_str(&format!("&to={t}"));
        }

        let endpoint = format!(
            "historical-price-eod/full?symbol={}{}",
            symbol.to_uppercase(),
            params
        );
        // The stable API returns a flat array, not a wrapped response
        self.get(&endpoint).await
    }

    /// Get financial ratios for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Stock ticker symbol
    /// * `period` - Annual or quarterly
    /// * `limit` - Number of periods to return (most recent first)
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn ratios(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<FinancialRatios>> {
        let limit_param = limit.map(|l| format!("&limit={l}")).unwrap_or_default();
        let endpoint = format!(
            "ratios?symbol={}&period={}{}",
            symbol.to_uppercase(),
            period.as_str(),
            limit_param
        );
        self.get(&endpoint).await
    }

    /// Get year-over-year growth figures for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn financial_growth(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<FinancialGrowth>> {
        let limit_param = limit.map(|l| format!("&limit={l}")).unwrap_or_default();
        let endpoint = format!(
            "financial-growth?symbol={}&period={}{}",
            symbol.to_uppercase(),
            period.as_str(),
            limit_param
        );
        self.get(&endpoint).await
    }

    /// Get the company profile (sector, industry, market cap) for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn profile(&self, symbol: &str) -> Result<CompanyProfile> {
        let endpoint = format!("profile?symbol={}", symbol.to_uppercase());
        let profiles: Vec<CompanyProfile> = self.get(&endpoint).await?;
        profiles
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }
}
