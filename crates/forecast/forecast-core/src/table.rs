//! Forecast table construction
//!
//! Fits every requested (category, column) pair independently and collects
//! the results into one sorted [`ForecastTable`]. Pairs whose data cannot be
//! fitted are skipped and reported, never fatal.

use crate::trend::LinearTrend;
use crate::uncertainty::BoundedUncertainty;
use forecast_spi::{
    ForecastError, ForecastRow, ForecastTable, HistoricalGroup, Result, TrendFitter,
    UncertaintyEstimator,
};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Default number of years to forecast
pub const DEFAULT_HORIZON: usize = 5;

/// Requested columns per category
pub type TargetColumns = BTreeMap<String, Vec<String>>;

/// A (category, metric) pair that produced no rows, and why
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedMetric {
    pub category: String,
    pub metric: String,
    pub reason: ForecastError,
}

/// Outcome of a table build
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    pub table: ForecastTable,
    pub skipped: Vec<SkippedMetric>,
}

/// Builds forecast tables from historical groups
///
/// # Example
///
/// ```rust
/// use forecast_core::table::{ForecastTableBuilder, TargetColumns};
/// use forecast_core::HistoricalGroup;
///
/// let group = HistoricalGroup::new("Foreign Workers", vec![2021, 2022, 2023])
///     .with_column("Total workers", vec![1000.0, 1100.0, 1200.0]);
/// let targets = TargetColumns::from([(
///     "Foreign Workers".to_string(),
///     vec!["Total workers".to_string()],
/// )]);
///
/// let report = ForecastTableBuilder::new().with_horizon(2).build(&[group], &targets).unwrap();
/// assert_eq!(report.table.len(), 2);
/// ```
pub struct ForecastTableBuilder {
    fitter: Box<dyn TrendFitter>,
    estimator: Box<dyn UncertaintyEstimator>,
    horizon: usize,
    include_cv: bool,
    include_r2: bool,
}

impl Default for ForecastTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastTableBuilder {
    /// Linear trend, default uncertainty bounds, five years, all columns
    pub fn new() -> Self {
        Self {
            fitter: Box::new(LinearTrend::new()),
            estimator: Box::new(BoundedUncertainty::default()),
            horizon: DEFAULT_HORIZON,
            include_cv: true,
            include_r2: true,
        }
    }

    pub fn with_fitter(mut self, fitter: Box<dyn TrendFitter>) -> Self {
        self.fitter = fitter;
        self
    }

    pub fn with_estimator(mut self, estimator: Box<dyn UncertaintyEstimator>) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn include_cv(mut self, include: bool) -> Self {
        self.include_cv = include;
        self
    }

    pub fn include_r2(mut self, include: bool) -> Self {
        self.include_r2 = include;
        self
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Forecast every target column of every group
    ///
    /// Forecast years start after the latest year of any group. Fails only
    /// when the horizon is zero.
    pub fn build(&self, groups: &[HistoricalGroup], targets: &TargetColumns) -> Result<BuildReport> {
        if self.horizon == 0 {
            return Err(ForecastError::InvalidParameter {
                name: "horizon".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let mut skipped = Vec::new();

        for (category, columns) in targets {
            if groups.iter().all(|g| &g.category != category) {
                for column in columns {
                    skipped.push(skip(
                        category,
                        column,
                        ForecastError::MissingColumn {
                            category: category.clone(),
                            column: column.clone(),
                        },
                    ));
                }
            }
        }

        let Some(last_year) = groups.iter().filter_map(HistoricalGroup::last_year).max() else {
            tracing::info!(skipped = skipped.len(), "no historical years, empty forecast table");
            return Ok(BuildReport {
                table: ForecastTable::default(),
                skipped,
            });
        };

        let jobs: Vec<(&HistoricalGroup, &str)> = groups
            .iter()
            .flat_map(|group| {
                targets
                    .get(&group.category)
                    .into_iter()
                    .flatten()
                    .map(move |column| (group, column.as_str()))
            })
            .collect();

        let outcomes: Vec<std::result::Result<Vec<ForecastRow>, SkippedMetric>> = jobs
            .par_iter()
            .map(|&(group, column)| {
                self.forecast_metric(group, column, last_year)
                    .map_err(|reason| skip(&group.category, column, reason))
            })
            .collect();

        let mut rows = Vec::with_capacity(jobs.len() * self.horizon);
        for outcome in outcomes {
            match outcome {
                Ok(metric_rows) => rows.extend(metric_rows),
                Err(skipped_metric) => skipped.push(skipped_metric),
            }
        }

        let table = ForecastTable::from_rows(rows);
        tracing::info!(
            rows = table.len(),
            skipped = skipped.len(),
            first_year = last_year + 1,
            horizon = self.horizon,
            "built forecast table"
        );

        Ok(BuildReport { table, skipped })
    }

    /// Rows for one column of one group
    fn forecast_metric(
        &self,
        group: &HistoricalGroup,
        column: &str,
        last_year: i32,
    ) -> Result<Vec<ForecastRow>> {
        let series = group.series(column)?;
        let fit = self.fitter.fit(&series)?;

        tracing::debug!(
            category = %group.category,
            metric = column,
            fitter = self.fitter.name(),
            slope = fit.slope,
            r_squared = %fit.r_squared,
            "fitted trend"
        );

        let cv = self.include_cv.then_some(fit.cv);
        let r_squared = self.include_r2.then_some(fit.r_squared);

        let points = self.fitter.forecast(&fit, last_year, self.horizon)?;
        Ok(points
            .into_iter()
            .map(|(year, step, forecast)| ForecastRow {
                year,
                category: group.category.clone(),
                metric: column.to_string(),
                horizon: step,
                forecast,
                uncertainty: self.estimator.estimate(fit.mae, step, forecast),
                cv,
                r_squared,
                mape: fit.mape,
            })
            .collect())
    }
}

fn skip(category: &str, metric: &str, reason: ForecastError) -> SkippedMetric {
    tracing::warn!(category, metric, %reason, "skipping metric");
    SkippedMetric {
        category: category.to_string(),
        metric: metric.to_string(),
        reason,
    }
}
