//! Features command implementation.

use anyhow::{Context, Result};
use ronda_features::FeatureExtractor;
use ronda_fmp::FmpClient;
use ronda_traits::MarketDataProvider;

/// Show the raw feature record for one symbol.
pub(crate) async fn show_features(symbol: &str, lookback: usize) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       Raw Features                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let provider = FmpClient::from_env()
        .context("failed to initialize FMP client. Set FMP_API_KEY in the environment")?;

    let symbol = symbol.to_uppercase();
    println!("Symbol: {symbol}");
    println!("Fetching market data ({lookback} trading days)...\n");

    let snapshot = provider
        .fetch(&symbol, lookback)
        .await
        .with_context(|| format!("failed to fetch data for {symbol}"))?;
    let features = FeatureExtractor::default()
        .extract(&snapshot.series, &snapshot.fundamentals)
        .with_context(|| format!("failed to extract features for {symbol}"))?;

    println!("Price features:");
    println!("{}", "-".repeat(60));
    println!("  annualized volatility  {:>10.2} %", features.annualized_volatility);
    println!("  autocorrelation (lag1) {:>10.4}", features.autocorr_lag1);
    println!("  reversion strength     {:>10.2}", features.reversion_strength);
    println!("  momentum 20d           {:>10.2} %", features.momentum_20);
    println!("  momentum 60d           {:>10.2} %", features.momentum_60);
    println!("  momentum 120d          {:>10.2} %", features.momentum_120);
    println!("  composite momentum     {:>10.2} %", features.composite_momentum);
    println!("  RSI(14)                {:>10.2}", features.rsi_14);
    println!("  Bollinger position     {:>10.4}", features.bollinger_position);
    println!("  price z-score          {:>10.4}", features.price_zscore);
    println!("  half-life              {:>10.0} days", features.half_life);

    println!("\nFundamentals:");
    println!("{}", "-".repeat(60));
    println!("  ROE                    {:>10.4}", features.roe);
    println!("  debt/equity            {:>10.4}", features.debt_to_equity);
    println!("  revenue growth         {:>10.4}", features.revenue_growth);
    println!("  net margin             {:>10.4}", features.net_margin);
    println!("  operating margin       {:>10.4}", features.operating_margin);
    println!("  current ratio          {:>10.4}", features.current_ratio);
    if let Some(sector) = &snapshot.fundamentals.sector {
        println!("  sector                 {sector}");
    }

    println!(
        "\nConfidence: {} ({} bars used)",
        features.confidence, features.bars_used
    );

    Ok(())
}
