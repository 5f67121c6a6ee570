//! Forecast Consumer API
//!
//! Consumer configurations and the engine API for trend forecasting.
//!
//! This crate provides:
//! - Configuration types, loadable from JSON
//! - [`ForecastEngine`], which wires the table builder and classifier from a config
//! - Re-exports from SPI and core for convenience

mod config;
mod engine;

pub use config::{ForecastConfig, ReliabilityConfig, UncertaintyConfig};
pub use engine::{ForecastEngine, ForecastRun};

// Re-export from core
pub use forecast_core::{
    export, metrics, reliability, summary, table, trend, uncertainty, BoundedUncertainty,
    BuildReport, ExportRow, ForecastTableBuilder, LinearTrend, RankOrder, ReliabilityExportRow,
    ReliabilityRule, RuleBasedClassifier, SkippedMetric, TargetColumns, TierCount,
};

// Re-export from SPI
pub use forecast_spi::{
    precision, BandPoint, FitResult, ForecastError, ForecastRow, ForecastTable, HistoricalGroup,
    MetricSeries, ReliabilityClassifier, ReliabilityRow, ReliabilityTier, Result, Statistic,
    TrendFitter, UncertaintyEstimator,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ForecastConfig, ForecastEngine, ForecastRun, ReliabilityConfig, UncertaintyConfig,
    };
    pub use forecast_core::{
        BuildReport, ExportRow, ForecastTableBuilder, LinearTrend, RankOrder,
        ReliabilityExportRow, RuleBasedClassifier, TargetColumns,
    };
    pub use forecast_spi::{
        ForecastError, ForecastRow, ForecastTable, HistoricalGroup, MetricSeries,
        ReliabilityClassifier, ReliabilityRow, ReliabilityTier, Result, Statistic, TrendFitter,
    };
}
