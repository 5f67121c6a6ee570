//! Forecast error types

use thiserror::Error;

/// Errors that can occur during forecasting operations
///
/// Only [`ForecastError::InvalidParameter`] and [`ForecastError::Config`] abort a
/// run. The remaining variants describe why a single metric was skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A requested column contains a missing value
    #[error("Missing value in column '{column}' at row {index}")]
    MissingValue { column: String, index: usize },

    /// A requested column does not exist in its group
    #[error("Column '{column}' not found in category '{category}'")]
    MissingColumn { category: String, column: String },

    /// The series violates its structural invariants
    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    /// A statistic was required but is mathematically undefined
    #[error("Undefined statistic: {0}")]
    UndefinedStatistic(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ForecastError {
    /// Whether this error aborts a whole run rather than a single metric
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ForecastError::InvalidParameter { .. } | ForecastError::Config(_)
        )
    }
}
