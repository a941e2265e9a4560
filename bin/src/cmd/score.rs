//! Score command implementation.

use anyhow::{Context, Result};
use ronda_features::FeatureExtractor;
use ronda_fmp::FmpClient;
use ronda_score::create_model;
use ronda_traits::MarketDataProvider;

/// Show component and composite scores for one symbol.
pub(crate) async fn show_score(symbol: &str, model_name: &str, lookback: usize) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       Symbol Score                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let model = create_model(model_name).context("failed to build model")?;
    let provider = FmpClient::from_env()
        .context("failed to initialize FMP client. Set FMP_API_KEY in the environment")?;

    let symbol = symbol.to_uppercase();
    println!("Symbol: {symbol}");
    println!("Model:  {}\n", model.name());

    println!("Fetching market data ({lookback} trading days)...");
    let snapshot = provider
        .fetch(&symbol, lookback)
        .await
        .with_context(|| format!("failed to fetch data for {symbol}"))?;
    println!("Loaded {} bars", snapshot.series.len());

    let features = FeatureExtractor::default()
        .extract(&snapshot.series, &snapshot.fundamentals)
        .with_context(|| format!("failed to extract features for {symbol}"))?;
    let score = model.aggregate(&features);

    println!("\nComponents:");
    println!("{}", "-".repeat(60));
    for component in &score.components {
        println!(
            "  {:<14} {:>6.1} / {:<6.1} ({:.0}%)",
            component.name,
            component.points,
            component.max_points,
            component.normalized() * 100.0
        );
    }

    println!("\nComposite: {:.4}", score.composite);
    println!("Rating:    {}", score.rating);
    println!("Confidence: {} ({} bars)", features.confidence, features.bars_used);

    Ok(())
}
