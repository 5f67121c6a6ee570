//! Forecast Service Provider Interface
//!
//! Defines the data model, contracts and error types for trend fitting,
//! uncertainty estimation and reliability classification.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{ReliabilityClassifier, TrendFitter, UncertaintyEstimator};
pub use error::{ForecastError, Result};
pub use model::{
    precision, round_to, BandPoint, FitResult, ForecastRow, ForecastTable, HistoricalGroup, MetricSeries,
    ReliabilityRow, ReliabilityTier, Statistic,
};
