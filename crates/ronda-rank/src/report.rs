//! Report export: CSV, JSON, and human-readable text.
//!
//! Column order in the tabular export is stable across runs: identity and
//! ranking columns first, then one column per component in model order,
//! then the key raw features.

use ronda_score::Rating;
use ronda_traits::{Result, RondaError};
use serde::{Deserialize, Serialize};
use std::io;

use crate::result::RunOutcome;

/// Fixed feature columns appended after the component columns.
const FEATURE_COLUMNS: [&str; 4] = [
    "composite_momentum",
    "rsi_14",
    "annualized_volatility",
    "confidence",
];

/// One row parsed back from a CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRow {
    /// Ticker symbol.
    pub symbol: String,
    /// 1-based rank.
    pub rank: usize,
    /// Composite score.
    pub composite: f64,
    /// Rating label.
    pub rating: Rating,
}

/// Write the ranked results as CSV.
///
/// # Errors
///
/// Returns [`RondaError::Export`] when serialization or the underlying
/// writer fails.
pub fn write_csv<W: io::Write>(outcome: &RunOutcome, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let component_names: Vec<String> = outcome
        .results
        .first()
        .map(|r| r.components.iter().map(|c| c.name.clone()).collect())
        .unwrap_or_default();

    let mut header: Vec<String> = vec![
        "symbol".to_string(),
        "rank".to_string(),
        "composite".to_string(),
        "rating".to_string(),
    ];
    header.extend(component_names.iter().cloned());
    header.extend(FEATURE_COLUMNS.iter().map(|c| c.to_string()));
    csv_writer
        .write_record(&header)
        .map_err(|e| RondaError::Export(e.to_string()))?;

    for result in &outcome.results {
        let mut record: Vec<String> = vec![
            result.symbol.clone(),
            result.rank.to_string(),
            format!("{:.6}", result.composite),
            result.rating.to_string(),
        ];
        record.extend(result.components.iter().map(|c| format!("{:.2}", c.points)));
        record.push(format!("{:.4}", result.features.composite_momentum));
        record.push(format!("{:.4}", result.features.rsi_14));
        record.push(format!("{:.4}", result.features.annualized_volatility));
        record.push(result.confidence.to_string());
        csv_writer
            .write_record(&record)
            .map_err(|e| RondaError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| RondaError::Export(e.to_string()))?;
    Ok(())
}

/// Parse the identity columns back out of a CSV export.
///
/// # Errors
///
/// Returns [`RondaError::Export`] on malformed CSV, a missing column, or
/// an unparseable rank/composite/rating value.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<ParsedRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| RondaError::Export(e.to_string()))?
        .clone();

    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| RondaError::Export(format!("missing column '{name}'")))
    };
    let symbol_idx = column("symbol")?;
    let rank_idx = column("rank")?;
    let composite_idx = column("composite")?;
    let rating_idx = column("rating")?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| RondaError::Export(e.to_string()))?;
        let field = |idx: usize| -> Result<&str> {
            record
                .get(idx)
                .ok_or_else(|| RondaError::Export("short record".to_string()))
        };
        let rating_label = field(rating_idx)?;
        rows.push(ParsedRow {
            symbol: field(symbol_idx)?.to_string(),
            rank: field(rank_idx)?
                .parse()
                .map_err(|e| RondaError::Export(format!("bad rank: {e}")))?,
            composite: field(composite_idx)?
                .parse()
                .map_err(|e| RondaError::Export(format!("bad composite: {e}")))?,
            rating: Rating::parse(rating_label)
                .ok_or_else(|| RondaError::Export(format!("bad rating '{rating_label}'")))?,
        });
    }
    Ok(rows)
}

/// Serialize the full outcome as pretty JSON, nested by symbol.
///
/// # Errors
///
/// Returns [`RondaError::Export`] when serialization fails.
pub fn to_json(outcome: &RunOutcome) -> Result<String> {
    serde_json::to_string_pretty(outcome).map_err(|e| RondaError::Export(e.to_string()))
}

/// Render a human-readable summary: top N, leaders, rating distribution,
/// sector aggregation, and skipped symbols with reasons.
#[must_use]
pub fn render_text(outcome: &RunOutcome, top_n: usize) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n╔══════════════════════════════════════════════════════════════╗"
    );
    let _ = writeln!(out, "║{:^62}║", format!("Model: {}", outcome.model));
    let _ = writeln!(
        out,
        "╚══════════════════════════════════════════════════════════════╝\n"
    );

    let _ = writeln!(
        out,
        "Scored {} symbols, skipped {}",
        outcome.summary.scored, outcome.summary.skipped
    );
    let _ = writeln!(
        out,
        "Composite mean {:.4}, median {:.4}\n",
        outcome.summary.mean_composite, outcome.summary.median_composite
    );

    let _ = writeln!(out, "Top {}:", top_n.min(outcome.results.len()));
    let _ = writeln!(out, "{}", "-".repeat(60));
    let _ = writeln!(
        out,
        "{:>4}  {:<8} {:>10}  {:<10} {:<9}",
        "Rank", "Symbol", "Composite", "Rating", "Confidence"
    );
    for result in outcome.results.iter().take(top_n) {
        let _ = writeln!(
            out,
            "{:>4}  {:<8} {:>10.4}  {:<10} {:<9}",
            result.rank,
            result.symbol,
            result.composite,
            result.rating.to_string(),
            result.confidence.to_string()
        );
    }

    if !outcome.summary.leaders.is_empty() {
        let _ = writeln!(out, "\nComponent leaders:");
        let _ = writeln!(out, "{}", "-".repeat(60));
        for leader in &outcome.summary.leaders {
            let _ = writeln!(
                out,
                "  {:<14} {:<8} ({:.1} pts)",
                leader.component, leader.symbol, leader.points
            );
        }
    }

    let _ = writeln!(out, "\nRating distribution:");
    let _ = writeln!(out, "{}", "-".repeat(60));
    for (rating, count) in &outcome.summary.rating_counts {
        let _ = writeln!(out, "  {:<10} {}", rating.to_string(), count);
    }

    if !outcome.summary.sectors.is_empty() {
        let _ = writeln!(out, "\nSectors:");
        let _ = writeln!(out, "{}", "-".repeat(60));
        for sector in &outcome.summary.sectors {
            let _ = writeln!(
                out,
                "  {:<22} {:>3} symbols, mean composite {:.4}",
                sector.sector, sector.count, sector.mean_composite
            );
        }
    }

    if !outcome.skipped.is_empty() {
        let _ = writeln!(out, "\nSkipped symbols:");
        let _ = writeln!(out, "{}", "-".repeat(60));
        for skip in &outcome.skipped {
            let _ = writeln!(out, "  {:<8} {} — {}", skip.symbol, skip.reason, skip.detail);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{CompositeResult, SkipReason, SkippedSymbol};
    use crate::summary::RunSummary;
    use approx::assert_relative_eq;
    use ronda_features::FeatureSet;
    use ronda_score::{ComponentScore, RatingTable};
    use ronda_traits::Confidence;

    fn features() -> FeatureSet {
        FeatureSet {
            annualized_volatility: 22.0,
            autocorr_lag1: 0.1,
            reversion_strength: 0.0,
            momentum_20: 5.0,
            momentum_60: 8.0,
            momentum_120: 12.0,
            composite_momentum: 7.3,
            rsi_14: 56.0,
            bollinger_position: 0.62,
            price_zscore: 0.5,
            half_life: 12.0,
            roe: 0.2,
            debt_to_equity: 0.8,
            revenue_growth: 0.1,
            net_margin: 0.15,
            operating_margin: 0.2,
            current_ratio: 1.3,
            bars_used: 504,
            confidence: Confidence::Full,
        }
    }

    fn result(symbol: &str, rank: usize, composite: f64) -> CompositeResult {
        CompositeResult {
            symbol: symbol.to_string(),
            sector: Some("Technology".to_string()),
            components: vec![
                ComponentScore {
                    name: "Quality".to_string(),
                    points: 20.0,
                    max_points: 25.0,
                },
                ComponentScore {
                    name: "Momentum".to_string(),
                    points: 15.0,
                    max_points: 25.0,
                },
            ],
            composite,
            rating: RatingTable::standard().classify(composite),
            rank,
            confidence: Confidence::Full,
            features: features(),
        }
    }

    fn outcome() -> RunOutcome {
        let results = vec![result("AAA", 1, 0.82), result("BBB", 2, 0.55)];
        let skipped = vec![SkippedSymbol {
            symbol: "CCC".to_string(),
            reason: SkipReason::DataUnavailable,
            detail: "No data available for CCC: empty response".to_string(),
        }];
        let summary = RunSummary::compute(&results, skipped.len());
        RunOutcome {
            model: "quality_momentum".to_string(),
            results,
            skipped,
            summary,
        }
    }

    #[test]
    fn test_csv_round_trip() {
        let outcome = outcome();
        let mut buffer = Vec::new();
        write_csv(&outcome, &mut buffer).unwrap();

        let rows = read_csv(buffer.as_slice()).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].symbol, "AAA");
        assert_eq!(rows[0].rank, 1);
        assert_relative_eq!(rows[0].composite, 0.82, epsilon = 1e-6);
        assert_eq!(rows[0].rating, Rating::Excellent);

        assert_eq!(rows[1].symbol, "BBB");
        assert_eq!(rows[1].rating, Rating::Neutral);
    }

    #[test]
    fn test_csv_stable_column_order() {
        let mut buffer = Vec::new();
        write_csv(&outcome(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "symbol,rank,composite,rating,Quality,Momentum,\
             composite_momentum,rsi_14,annualized_volatility,confidence"
        );
    }

    #[test]
    fn test_csv_empty_outcome() {
        let empty = RunOutcome {
            model: "quality_momentum".to_string(),
            results: vec![],
            skipped: vec![],
            summary: RunSummary::compute(&[], 0),
        };
        let mut buffer = Vec::new();
        write_csv(&empty, &mut buffer).unwrap();
        let rows = read_csv(buffer.as_slice()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_csv_rejects_missing_column() {
        let malformed = "symbol,rank\nAAA,1\n";
        let result = read_csv(malformed.as_bytes());
        assert!(matches!(result, Err(RondaError::Export(_))));
    }

    #[test]
    fn test_json_contains_nested_results() {
        let json = to_json(&outcome()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["model"], "quality_momentum");
        assert_eq!(value["results"][0]["symbol"], "AAA");
        assert_eq!(value["results"][0]["components"][0]["name"], "Quality");
        assert_eq!(value["skipped"][0]["reason"], "DataUnavailable");
    }

    #[test]
    fn test_text_report_lists_skipped_with_reason() {
        let text = render_text(&outcome(), 10);
        assert!(text.contains("quality_momentum"));
        assert!(text.contains("AAA"));
        assert!(text.contains("Skipped symbols"));
        assert!(text.contains("CCC"));
        assert!(text.contains("DataUnavailable"));
    }

    #[test]
    fn test_text_report_scenario_ranks() {
        // Scenario: A 0.82 ranks 1, B 0.55 ranks 2, C skipped.
        let outcome = outcome();
        assert_eq!(outcome.results[0].rank, 1);
        assert_relative_eq!(outcome.results[0].composite, 0.82);
        assert_eq!(outcome.results[1].rank, 2);
        assert_relative_eq!(outcome.results[1].composite, 0.55);
        assert_eq!(outcome.skipped[0].reason, SkipReason::DataUnavailable);
    }
}
