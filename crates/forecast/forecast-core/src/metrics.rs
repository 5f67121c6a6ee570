//! Fit accuracy metrics
//!
//! Residual statistics of a fitted line against the observations it was
//! fitted to. Statistics that can be undefined return [`Statistic`].

use forecast_spi::Statistic;

/// Arithmetic mean; NaN for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by n)
pub fn std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    (values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64).sqrt()
}

/// Mean Absolute Error
///
/// Average of |actual - fitted|. Same scale as the data.
pub fn mae(actual: &[f64], fitted: &[f64]) -> f64 {
    if actual.len() != fitted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(fitted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();

    sum / actual.len() as f64
}

/// Coefficient of determination, 1 - SS_res / SS_tot
///
/// A flat series (every value equal) has no SS_tot to explain. If the fit
/// reproduces it to within float rounding the result is 1.0, otherwise
/// `Undefined`. Any other series gets the plain formula.
pub fn r_squared(actual: &[f64], fitted: &[f64]) -> Statistic {
    if actual.len() != fitted.len() || actual.is_empty() {
        return Statistic::Undefined;
    }

    let ss_res: f64 = actual
        .iter()
        .zip(fitted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    let first = actual[0];
    if actual.iter().all(|a| *a == first) {
        let tolerance = actual.len() as f64 * f64::EPSILON * first * first;
        return if ss_res <= tolerance {
            Statistic::Value(1.0)
        } else {
            Statistic::Undefined
        };
    }

    let m = mean(actual);
    let ss_tot: f64 = actual.iter().map(|a| (a - m).powi(2)).sum();

    Statistic::from(1.0 - ss_res / ss_tot)
}

/// Mean Absolute Percentage Error, in percent
///
/// Averaged over the points whose actual value is nonzero only. `Undefined`
/// when every actual is zero.
pub fn mape(actual: &[f64], fitted: &[f64]) -> Statistic {
    if actual.len() != fitted.len() {
        return Statistic::Undefined;
    }

    let errors: Vec<f64> = actual
        .iter()
        .zip(fitted.iter())
        .filter(|(a, _)| **a != 0.0)
        .map(|(a, p)| ((a - p) / a).abs())
        .collect();

    if errors.is_empty() {
        return Statistic::Undefined;
    }

    Statistic::from(mean(&errors) * 100.0)
}

/// Coefficient of variation (std / mean), in percent
///
/// `Undefined` when the mean is zero.
pub fn coefficient_of_variation(values: &[f64]) -> Statistic {
    let m = mean(values);
    if m == 0.0 || m.is_nan() {
        return Statistic::Undefined;
    }
    Statistic::from(std_dev(values) / m * 100.0)
}
