//! Fitted trend model and its diagnostics

use super::Statistic;
use serde::{Deserialize, Serialize};

/// Result of fitting a linear trend to one metric
///
/// `value = slope * year + intercept`. Diagnostics are measured on the
/// historical points the line was fitted to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Change per year
    pub slope: f64,
    /// Value of the line at year 0
    pub intercept: f64,
    /// Mean absolute residual
    pub mae: f64,
    /// Coefficient of determination
    pub r_squared: Statistic,
    /// Mean absolute percentage error over nonzero actuals, in percent
    pub mape: Statistic,
    /// Coefficient of variation of the observations, in percent
    pub cv: Statistic,
    /// Number of observations used in fitting
    pub n_observations: usize,
    /// Last observed year
    pub last_year: i32,
}

impl FitResult {
    /// Evaluate the fitted line at `year`
    pub fn predict(&self, year: i32) -> f64 {
        self.slope * year as f64 + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_is_the_line() {
        let fit = FitResult {
            slope: 20.0,
            intercept: -40320.0,
            mae: 0.0,
            r_squared: Statistic::Value(1.0),
            mape: Statistic::Value(0.0),
            cv: Statistic::Value(20.2),
            n_observations: 5,
            last_year: 2025,
        };
        assert_eq!(fit.predict(2026), 200.0);
        assert_eq!(fit.predict(2030), 20.0 * 2030.0 - 40320.0);
    }
}
