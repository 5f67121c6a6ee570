//! Linear trend fitting
//!
//! Uses ordinary least squares to fit `value = slope * year + intercept` to a
//! metric's annual history, then extrapolates it year by year.
//!
//! ## When to Use
//!
//! - Short annual series (a handful of points)
//! - A transparent baseline rather than a causal model

use crate::metrics;
use forecast_spi::{FitResult, ForecastError, MetricSeries, Result, Statistic, TrendFitter};

/// Minimum number of observations for a line fit
pub const MIN_OBSERVATIONS: usize = 2;

/// Single-predictor OLS trend on calendar year
///
/// # Example
///
/// ```rust
/// use forecast_core::trend::LinearTrend;
/// use forecast_core::{MetricSeries, TrendFitter};
///
/// let series = MetricSeries::from_points(&[(2021, 10.0), (2022, 12.0), (2023, 14.0)]).unwrap();
/// let fit = LinearTrend::new().fit(&series).unwrap();
///
/// assert!((fit.predict(2024) - 16.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearTrend;

impl LinearTrend {
    pub fn new() -> Self {
        Self
    }
}

impl TrendFitter for LinearTrend {
    fn fit(&self, series: &MetricSeries) -> Result<FitResult> {
        let n_observations = series.len();
        if n_observations < MIN_OBSERVATIONS {
            return Err(ForecastError::InsufficientData {
                required: MIN_OBSERVATIONS,
                actual: n_observations,
            });
        }

        let years: Vec<f64> = series.years().iter().map(|&y| y as f64).collect();
        let values = series.values();
        let n = n_observations as f64;

        // Centered on the mean year so four-digit years keep full precision
        let mean_x = years.iter().sum::<f64>() / n;
        let mean_y = values.iter().sum::<f64>() / n;

        let sxx: f64 = years.iter().map(|x| (x - mean_x).powi(2)).sum();
        let sxy: f64 = years
            .iter()
            .zip(values.iter())
            .map(|(x, y)| (x - mean_x) * (y - mean_y))
            .sum();

        if sxx == 0.0 {
            return Err(ForecastError::InvalidSeries(
                "years have no spread".to_string(),
            ));
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;

        let mut fit = FitResult {
            slope,
            intercept,
            mae: 0.0,
            r_squared: Statistic::Undefined,
            mape: Statistic::Undefined,
            cv: metrics::coefficient_of_variation(values),
            n_observations,
            last_year: series.last_year().unwrap_or_default(),
        };

        let fitted: Vec<f64> = series.years().iter().map(|&y| fit.predict(y)).collect();
        fit.mae = metrics::mae(values, &fitted);
        fit.r_squared = metrics::r_squared(values, &fitted);
        fit.mape = metrics::mape(values, &fitted);

        Ok(fit)
    }

    fn name(&self) -> &str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perfect() -> MetricSeries {
        MetricSeries::from_points(&[
            (2021, 100.0),
            (2022, 120.0),
            (2023, 140.0),
            (2024, 160.0),
            (2025, 180.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_perfect_linear_trend() {
        let fit = LinearTrend::new().fit(&perfect()).unwrap();

        assert_eq!(fit.slope, 20.0);
        assert_eq!(fit.intercept, -40320.0);
        assert_eq!(fit.mae, 0.0);
        assert_eq!(fit.r_squared, Statistic::Value(1.0));
        assert_eq!(fit.mape, Statistic::Value(0.0));
        assert_eq!(fit.n_observations, 5);
        assert_eq!(fit.last_year, 2025);
        assert_eq!(fit.predict(2026), 200.0);
    }

    #[test]
    fn test_forecast_is_exactly_the_line() {
        let series = MetricSeries::from_points(&[
            (2021, 3520.0),
            (2022, 3987.0),
            (2023, 4410.0),
            (2024, 4388.0),
            (2025, 5120.0),
        ])
        .unwrap();
        let fitter = LinearTrend::new();
        let fit = fitter.fit(&series).unwrap();

        for (year, step, value) in fitter.forecast(&fit, 2025, 5).unwrap() {
            assert_eq!(value, fit.slope * year as f64 + fit.intercept);
            assert_eq!(year, 2025 + step as i32);
        }
    }

    #[test]
    fn test_noisy_fit_diagnostics() {
        let series = MetricSeries::from_points(&[
            (2021, 1.0),
            (2022, 3.0),
            (2023, 2.0),
            (2024, 4.0),
        ])
        .unwrap();
        let fit = LinearTrend::new().fit(&series).unwrap();

        // slope = 0.8, fitted = [1.3, 2.1, 2.9, 3.7]
        assert!((fit.slope - 0.8).abs() < 1e-9);
        assert!((fit.mae - 0.6).abs() < 1e-9);
        assert!((fit.r_squared.value().unwrap() - 0.64).abs() < 1e-9);
        assert!(fit.mape.is_defined());
    }

    #[test]
    fn test_two_points_fit_exactly() {
        let series = MetricSeries::from_points(&[(2024, 500.0), (2025, 450.0)]).unwrap();
        let fit = LinearTrend::new().fit(&series).unwrap();

        assert!((fit.slope + 50.0).abs() < 1e-9);
        assert!(fit.mae.abs() < 1e-9);
        assert!((fit.predict(2026) - 400.0).abs() < 1e-6);
    }

    #[test]
    fn test_insufficient_data() {
        let series = MetricSeries::from_points(&[(2025, 1.0)]).unwrap();
        let err = LinearTrend::new().fit(&series).unwrap_err();
        assert_eq!(
            err,
            ForecastError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_flat_series() {
        let series = MetricSeries::from_points(&[(2021, 40.0), (2022, 40.0), (2023, 40.0)]).unwrap();
        let fit = LinearTrend::new().fit(&series).unwrap();

        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.r_squared, Statistic::Value(1.0));
        assert_eq!(fit.cv, Statistic::Value(0.0));
    }

    #[test]
    fn test_small_variance_at_large_magnitude_is_not_flat() {
        let series = MetricSeries::from_points(&[
            (2021, 1e7),
            (2022, 1e7 + 10.0),
            (2023, 1e7 - 5.0),
            (2024, 1e7 + 8.0),
            (2025, 1e7 - 2.0),
        ])
        .unwrap();
        let fit = LinearTrend::new().fit(&series).unwrap();

        // SS_tot = 168.8, Sxy = -6, Sxx = 10
        assert!((fit.slope + 0.6).abs() < 1e-9);
        let r2 = fit.r_squared.value().unwrap();
        assert!((r2 - 3.6 / 168.8).abs() < 1e-6);
    }

    #[test]
    fn test_all_zero_series() {
        let series = MetricSeries::from_points(&[(2021, 0.0), (2022, 0.0)]).unwrap();
        let fit = LinearTrend::new().fit(&series).unwrap();

        assert_eq!(fit.mape, Statistic::Undefined);
        assert_eq!(fit.cv, Statistic::Undefined);
        assert_eq!(fit.predict(2030), 0.0);
    }

    #[test]
    fn test_zero_mean_series_has_undefined_cv() {
        let series = MetricSeries::from_points(&[(2021, -30.0), (2022, 0.0), (2023, 30.0)]).unwrap();
        let fit = LinearTrend::new().fit(&series).unwrap();

        assert_eq!(fit.cv, Statistic::Undefined);
        assert_eq!(fit.r_squared, Statistic::Value(1.0));
    }
}
