//! Data types for FMP API responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reporting period for financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Annual reports (10-K filings).
    #[default]
    Annual,
    /// Quarterly reports (10-Q filings).
    Quarter,
}

impl Period {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

/// Historical price data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPrice {
    /// Date.
    pub date: String,
    /// Open price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Close price.
    pub close: f64,
    /// Adjusted close.
    #[serde(rename = "adjClose", default)]
    pub adj_close: f64,
    /// Volume.
    #[serde(default)]
    pub volume: f64,
}

impl HistoricalPrice {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Financial ratios from FMP.
///
/// Fields missing from a response default to 0.0, the pipeline's neutral
/// sentinel, so a sparse filing never fails a fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    /// Filing date.
    pub date: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Reporting period.
    pub period: String,
    /// Operating profit margin.
    #[serde(default)]
    pub operating_profit_margin: f64,
    /// Net profit margin.
    #[serde(default)]
    pub net_profit_margin: f64,
    /// Return on equity.
    #[serde(default)]
    pub return_on_equity: f64,
    /// Current ratio.
    #[serde(default)]
    pub current_ratio: f64,
    /// Debt to equity ratio.
    #[serde(default)]
    pub debt_equity_ratio: f64,
}

/// Year-over-year growth figures from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGrowth {
    /// Filing date.
    pub date: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Revenue growth.
    #[serde(default)]
    pub revenue_growth: f64,
    /// Net income growth.
    #[serde(default)]
    pub net_income_growth: f64,
    /// EPS growth.
    #[serde(default, rename = "epsgrowth")]
    pub eps_growth: f64,
}

/// Company profile data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    #[serde(default)]
    pub company_name: String,
    /// Sector name.
    #[serde(default)]
    pub sector: String,
    /// Industry name.
    #[serde(default)]
    pub industry: String,
    /// Exchange short name.
    #[serde(default)]
    pub exchange: String,
    /// Market capitalization.
    #[serde(default)]
    pub market_cap: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_as_str() {
        assert_eq!(Period::Annual.as_str(), "annual");
        assert_eq!(Period::Quarter.as_str(), "quarter");
    }

    #[test]
    fn test_historical_price_deserialize() {
        let json = r#"{
            "date": "2024-06-03",
            "open": 192.9,
            "high": 194.99,
            "low": 192.52,
            "close": 194.03,
            "adjClose": 193.89,
            "volume": 50080500
        }"#;
        let price: HistoricalPrice = serde_json::from_str(json).unwrap();
        assert_eq!(price.close, 194.03);
        assert_eq!(
            price.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 6, 3)
        );
    }

    #[test]
    fn test_ratios_missing_fields_default() {
        let json = r#"{
            "date": "2023-12-31",
            "symbol": "AAPL",
            "period": "FY",
            "returnOnEquity": 1.56
        }"#;
        let ratios: FinancialRatios = serde_json::from_str(json).unwrap();
        assert_eq!(ratios.return_on_equity, 1.56);
        assert_eq!(ratios.debt_equity_ratio, 0.0);
        assert_eq!(ratios.current_ratio, 0.0);
    }

    #[test]
    fn test_profile_deserialize() {
        let json = r#"{
            "symbol": "AAPL",
            "companyName": "Apple Inc.",
            "sector": "Technology",
            "industry": "Consumer Electronics",
            "exchange": "NASDAQ",
            "marketCap": 2900000000000.0
        }"#;
        let profile: CompanyProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.sector, "Technology");
    }

    #[test]
    fn test_invalid_date_parses_to_none() {
        let price = HistoricalPrice {
            date: "not-a-date".to_string(),
            open: 1.0,
            high: 1.0,
            low: 1.0,
            close: 1.0,
            adj_close: 1.0,
            volume: 0.0,
        };
        assert_eq!(price.parsed_date(), None);
    }
}
