//! Forecast Core
//!
//! Core implementations for linear trend forecasting, bounded uncertainty,
//! rule-based reliability tiers and forecast table assembly.

pub mod export;
pub mod metrics;
pub mod reliability;
pub mod summary;
pub mod table;
pub mod trend;
pub mod uncertainty;

// Re-export SPI types for implementations
pub use forecast_spi::{
    precision, round_to, BandPoint, FitResult, ForecastError, ForecastRow, ForecastTable,
    HistoricalGroup, MetricSeries, ReliabilityClassifier, ReliabilityRow, ReliabilityTier, Result,
    Statistic, TrendFitter, UncertaintyEstimator,
};

// Re-export main types
pub use export::{ExportRow, ReliabilityExportRow};
pub use reliability::{ReliabilityRule, RuleBasedClassifier};
pub use summary::{RankOrder, TierCount};
pub use table::{BuildReport, ForecastTableBuilder, SkippedMetric, TargetColumns};
pub use trend::LinearTrend;
pub use uncertainty::BoundedUncertainty;
