//! Run-level summary statistics.

use ronda_score::Rating;
use ronda_traits::stats::{mean, median};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::result::CompositeResult;

/// Mean and median of one component's points across the scored universe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentStat {
    /// Component name.
    pub name: String,
    /// Mean points.
    pub mean: f64,
    /// Median points.
    pub median: f64,
}

/// The max-scoring symbol for one component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentLeader {
    /// Component name.
    pub component: String,
    /// Leading symbol.
    pub symbol: String,
    /// Its points in that component.
    pub points: f64,
}

/// Aggregate composite statistics for one sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorStat {
    /// Sector name.
    pub sector: String,
    /// Number of scored symbols in the sector.
    pub count: usize,
    /// Mean composite across the sector.
    pub mean_composite: f64,
}

/// Distribution and leader statistics for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Symbols scored.
    pub scored: usize,
    /// Symbols skipped.
    pub skipped: usize,
    /// Mean composite across scored symbols.
    pub mean_composite: f64,
    /// Median composite across scored symbols.
    pub median_composite: f64,
    /// Per-component mean/median, in model order.
    pub component_stats: Vec<ComponentStat>,
    /// Count per rating bucket, best first.
    pub rating_counts: Vec<(Rating, usize)>,
    /// Max-scoring symbol per component, in model order.
    pub leaders: Vec<ComponentLeader>,
    /// Sector aggregation, present when sector metadata is available.
    pub sectors: Vec<SectorStat>,
}

impl RunSummary {
    /// Compute summary statistics over ranked results.
    #[must_use]
    pub fn compute(results: &[CompositeResult], skipped: usize) -> Self {
        let composites: Vec<f64> = results.iter().map(|r| r.composite).collect();

        let component_names: Vec<String> = results
            .first()
            .map(|r| r.components.iter().map(|c| c.name.clone()).collect())
            .unwrap_or_default();

        let mut component_stats = Vec::with_capacity(component_names.len());
        let mut leaders = Vec::with_capacity(component_names.len());
        for (idx, name) in component_names.iter().enumerate() {
            let points: Vec<f64> = results.iter().map(|r| r.components[idx].points).collect();
            component_stats.push(ComponentStat {
                name: name.clone(),
                mean: mean(&points),
                median: median(&points),
            });
            if let Some((leader, best)) = results
                .iter()
                .map(|r| (r.symbol.as_str(), r.components[idx].points))
                .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            {
                leaders.push(ComponentLeader {
                    component: name.clone(),
                    symbol: leader.to_string(),
                    points: best,
                });
            }
        }

        let rating_order = [
            Rating::Excellent,
            Rating::Strong,
            Rating::Neutral,
            Rating::Weak,
            Rating::Poor,
        ];
        let rating_counts = rating_order
            .into_iter()
            .map(|rating| {
                let count = results.iter().filter(|r| r.rating == rating).count();
                (rating, count)
            })
            .collect();

        let mut by_sector: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for result in results {
            if let Some(sector) = &result.sector {
                by_sector
                    .entry(sector.clone())
                    .or_default()
                    .push(result.composite);
            }
        }
        let sectors = by_sector
            .into_iter()
            .map(|(sector, composites)| SectorStat {
                sector,
                count: composites.len(),
                mean_composite: mean(&composites),
            })
            .collect();

        Self {
            scored: results.len(),
            skipped,
            mean_composite: mean(&composites),
            median_composite: median(&composites),
            component_stats,
            rating_counts,
            leaders,
            sectors,
        }
    }
}
