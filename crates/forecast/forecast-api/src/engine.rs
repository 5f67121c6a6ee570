//! Forecasting engine
//!
//! Wires a [`ForecastTableBuilder`] and a [`RuleBasedClassifier`] from one
//! [`ForecastConfig`].

use crate::config::ForecastConfig;
use forecast_core::export::{export_reliability, export_table};
use forecast_core::summary::{rank_by_uncertainty, tier_counts};
use forecast_core::{
    BoundedUncertainty, BuildReport, ExportRow, ForecastTableBuilder, RankOrder,
    ReliabilityExportRow, RuleBasedClassifier, SkippedMetric, TargetColumns, TierCount,
};
use forecast_spi::{ForecastTable, HistoricalGroup, ReliabilityRow, Result};

/// Builder plus classifier, configured once and reused across runs
///
/// # Example
///
/// ```rust
/// use forecast_api::{ForecastEngine, HistoricalGroup, ReliabilityTier, TargetColumns};
///
/// let group = HistoricalGroup::new("Foreign Workers", vec![2021, 2022, 2023, 2024, 2025])
///     .with_column("Total workers", vec![100.0, 120.0, 140.0, 160.0, 180.0]);
/// let targets = TargetColumns::from([(
///     "Foreign Workers".to_string(),
///     vec!["Total workers".to_string()],
/// )]);
///
/// let run = ForecastEngine::new().run(&[group], &targets).unwrap();
/// assert_eq!(run.reliability[0].tier, ReliabilityTier::Good);
/// ```
pub struct ForecastEngine {
    builder: ForecastTableBuilder,
    classifier: RuleBasedClassifier,
}

/// Everything one run produces
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRun {
    pub table: ForecastTable,
    pub skipped: Vec<SkippedMetric>,
    /// One row per table row, in table order
    pub reliability: Vec<ReliabilityRow>,
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastEngine {
    /// Engine with the default configuration
    pub fn new() -> Self {
        Self {
            builder: ForecastTableBuilder::new(),
            classifier: RuleBasedClassifier::default(),
        }
    }

    /// Validate `config` and build an engine from it
    pub fn from_config(config: &ForecastConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            horizon = config.horizon,
            rules = config.reliability.rules.len(),
            "configuring forecast engine"
        );

        let builder = ForecastTableBuilder::new()
            .with_horizon(config.horizon)
            .include_cv(config.include_cv)
            .include_r2(config.include_r2)
            .with_estimator(Box::new(BoundedUncertainty::from(config.uncertainty)));

        Ok(Self {
            builder,
            classifier: RuleBasedClassifier::from(&config.reliability),
        })
    }

    pub fn horizon(&self) -> usize {
        self.builder.horizon()
    }

    /// Build the forecast table
    pub fn forecast(&self, groups: &[HistoricalGroup], targets: &TargetColumns) -> Result<BuildReport> {
        self.builder.build(groups, targets)
    }

    /// Assess any table snapshot; the table is left untouched
    pub fn assess(&self, table: &ForecastTable) -> Vec<ReliabilityRow> {
        self.classifier.assess_table(table)
    }

    /// Forecast, then assess
    pub fn run(&self, groups: &[HistoricalGroup], targets: &TargetColumns) -> Result<ForecastRun> {
        let BuildReport { table, skipped } = self.forecast(groups, targets)?;
        let reliability = self.assess(&table);
        Ok(ForecastRun {
            table,
            skipped,
            reliability,
        })
    }
}

impl ForecastRun {
    pub fn export_table(&self) -> Vec<ExportRow> {
        export_table(&self.table)
    }

    pub fn export_reliability(&self) -> Vec<ReliabilityExportRow> {
        export_reliability(&self.reliability)
    }

    /// Up to `limit` forecasts of `year`, lowest uncertainty first
    pub fn most_reliable(&self, year: i32, limit: usize) -> Vec<&ReliabilityRow> {
        rank_by_uncertainty(&self.reliability, year, RankOrder::MostReliable, limit)
    }

    /// Up to `limit` forecasts of `year`, highest uncertainty first
    pub fn least_reliable(&self, year: i32, limit: usize) -> Vec<&ReliabilityRow> {
        rank_by_uncertainty(&self.reliability, year, RankOrder::LeastReliable, limit)
    }

    pub fn tier_counts(&self) -> Vec<TierCount> {
        tier_counts(&self.reliability)
    }
}
