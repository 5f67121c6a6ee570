//! Trait for per-metric trend fitting

use crate::error::{ForecastError, Result};
use crate::model::{FitResult, MetricSeries};

/// Fits a trend to one metric's history and extrapolates it
///
/// Implementations must be pure: the same series always yields the same fit.
///
/// # Example
///
/// ```rust,ignore
/// use forecast_spi::{TrendFitter, MetricSeries};
///
/// fn next_year<F: TrendFitter>(fitter: &F, series: &MetricSeries) -> forecast_spi::Result<f64> {
///     let fit = fitter.fit(series)?;
///     Ok(fit.predict(fit.last_year + 1))
/// }
/// ```
pub trait TrendFitter: Send + Sync {
    /// Fit the model to the series
    ///
    /// Fails with `InsufficientData` when the series is too short to fit.
    fn fit(&self, series: &MetricSeries) -> Result<FitResult>;

    /// Point forecasts for `horizon` years after `last_year`
    ///
    /// Returns `(year, step, value)` with `step` starting at 1.
    fn forecast(&self, fit: &FitResult, last_year: i32, horizon: usize) -> Result<Vec<(i32, usize, f64)>> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter {
                name: "horizon".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok((1..=horizon)
            .map(|step| {
                let year = last_year + step as i32;
                (year, step, fit.predict(year))
            })
            .collect())
    }

    /// Name of this fitter
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Statistic;

    /// Mock implementation: flat line at the last observed value
    struct NaiveFitter;

    impl TrendFitter for NaiveFitter {
        fn fit(&self, series: &MetricSeries) -> Result<FitResult> {
            let (last_year, last) = series.points().last().ok_or(ForecastError::InsufficientData {
                required: 1,
                actual: 0,
            })?;
            Ok(FitResult {
                slope: 0.0,
                intercept: last,
                mae: 0.0,
                r_squared: Statistic::Undefined,
                mape: Statistic::Undefined,
                cv: Statistic::Undefined,
                n_observations: series.len(),
                last_year,
            })
        }

        fn name(&self) -> &str {
            "naive"
        }
    }

    #[test]
    fn test_default_forecast_steps() {
        let series = MetricSeries::from_points(&[(2024, 5.0), (2025, 7.0)]).unwrap();
        let fitter = NaiveFitter;
        let fit = fitter.fit(&series).unwrap();

        let points = fitter.forecast(&fit, 2025, 3).unwrap();
        assert_eq!(points, vec![(2026, 1, 7.0), (2027, 2, 7.0), (2028, 3, 7.0)]);
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let series = MetricSeries::from_points(&[(2025, 1.0)]).unwrap();
        let fitter = NaiveFitter;
        let fit = fitter.fit(&series).unwrap();

        let err = fitter.forecast(&fit, 2025, 0).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_empty_series_fails() {
        let series = MetricSeries::from_points(&[]).unwrap();
        assert!(NaiveFitter.fit(&series).is_err());
        assert_eq!(NaiveFitter.name(), "naive");
    }

    #[test]
    fn test_trait_object_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn TrendFitter>();
    }
}
