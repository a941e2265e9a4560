//! Rank command implementation.

use anyhow::{Context, Result};
use ronda_features::FeatureExtractor;
use ronda_fmp::FmpClient;
use ronda_rank::{report, RankerConfig, RunOutcome, UniverseRanker};
use ronda_score::create_model;
use std::fs::File;
use std::io::Write as _;

use crate::data;

/// Run a model over a universe and export the report.
pub(crate) async fn run_ranking(
    model_name: &str,
    symbols: &[String],
    lookback: usize,
    format: &str,
    output: Option<&str>,
    top: usize,
) -> Result<()> {
    let model = create_model(model_name).context("failed to build model")?;
    let provider = FmpClient::from_env()
        .context("failed to initialize FMP client. Set FMP_API_KEY in the environment")?;

    let universe = data::resolve_universe(symbols);
    println!(
        "Ranking {} symbols with model '{}' ({} trading days of history)...",
        universe.len(),
        model.name(),
        lookback
    );

    let ranker = UniverseRanker::with_config(
        provider,
        model,
        FeatureExtractor::default(),
        RankerConfig {
            lookback_days: lookback,
        },
    );
    let outcome = ranker.run(&universe).await;

    let rendered = render(&outcome, format, top)?;
    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create output file {path}"))?;
            file.write_all(rendered.as_bytes())?;
            println!(
                "Wrote {} report for {} symbols to {path}",
                format,
                outcome.results.len()
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn render(outcome: &RunOutcome, format: &str, top: usize) -> Result<String> {
    match format {
        "text" => Ok(report::render_text(outcome, top)),
        "csv" => {
            let mut buffer = Vec::new();
            report::write_csv(outcome, &mut buffer)?;
            Ok(String::from_utf8(buffer).context("CSV output was not valid UTF-8")?)
        }
        "json" => Ok(report::to_json(outcome)?),
        other => anyhow::bail!("unknown format '{other}', expected text, csv, or json"),
    }
}
