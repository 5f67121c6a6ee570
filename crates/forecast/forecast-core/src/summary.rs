//! Reliability summaries
//!
//! Read-only views over assessed rows: the most/least reliable forecasts of a
//! year and tier counts per metric.

use forecast_spi::{ReliabilityRow, ReliabilityTier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of an uncertainty ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankOrder {
    /// Lowest uncertainty % first
    MostReliable,
    /// Highest uncertainty % first
    LeastReliable,
}

/// Rows of one year ordered by uncertainty %
///
/// Rows with undefined uncertainty % come last in either order. Ties keep
/// table order. At most `limit` rows are returned.
pub fn rank_by_uncertainty(
    rows: &[ReliabilityRow],
    year: i32,
    order: RankOrder,
    limit: usize,
) -> Vec<&ReliabilityRow> {
    let mut ranked: Vec<&ReliabilityRow> = rows.iter().filter(|r| r.row.year == year).collect();
    ranked.sort_by(|a, b| {
        let (x, y) = (a.uncertainty_pct, b.uncertainty_pct);
        match (order, x.is_defined() && y.is_defined()) {
            (RankOrder::LeastReliable, true) => y.cmp_undefined_last(&x),
            _ => x.cmp_undefined_last(&y),
        }
    });
    ranked.truncate(limit);
    ranked
}

/// Number of forecasts in one tier for one metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCount {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Reliability")]
    pub tier: ReliabilityTier,
    #[serde(rename = "Count")]
    pub count: usize,
}

/// Count rows per (category, metric, tier), sorted by that key
pub fn tier_counts(rows: &[ReliabilityRow]) -> Vec<TierCount> {
    let mut counts: BTreeMap<(&str, &str, ReliabilityTier), usize> = BTreeMap::new();
    for r in rows {
        *counts
            .entry((r.row.category.as_str(), r.row.metric.as_str(), r.tier))
            .or_default() += 1;
    }
    counts
        .into_iter()
        .map(|((category, metric, tier), count)| TierCount {
            category: category.to_string(),
            metric: metric.to_string(),
            tier,
            count,
        })
        .collect()
}
