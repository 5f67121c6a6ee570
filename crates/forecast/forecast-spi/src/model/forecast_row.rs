//! Forecast row model

use super::Statistic;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Decimal places of presented statistics
pub mod precision {
    pub const CV: u32 = 1;
    pub const R_SQUARED: u32 = 3;
    pub const MAPE: u32 = 1;
    pub const UNCERTAINTY_PCT: u32 = 1;
}

/// One forecast for one (year, category, metric)
///
/// `cv` and `r_squared` are `None` when the column was not requested and
/// `Some(Statistic::Undefined)` when requested but undefined for the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub year: i32,
    pub category: String,
    pub metric: String,
    /// 1-based number of years past the last historical year
    pub horizon: usize,
    /// Point forecast in the metric's native units
    pub forecast: f64,
    /// Half-width of the uncertainty band (±), native units
    pub uncertainty: f64,
    pub cv: Option<Statistic>,
    pub r_squared: Option<Statistic>,
    pub mape: Statistic,
}

impl ForecastRow {
    /// Ordering key of the table: (year, category, metric)
    pub fn key(&self) -> (i32, &str, &str) {
        (self.year, &self.category, &self.metric)
    }

    pub fn cmp_key(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }

    pub fn lower(&self) -> f64 {
        self.forecast - self.uncertainty
    }

    pub fn upper(&self) -> f64 {
        self.forecast + self.uncertainty
    }

    /// Forecast as presented: nearest integer
    pub fn rounded_forecast(&self) -> f64 {
        self.forecast.round()
    }

    /// Uncertainty as presented: nearest integer
    pub fn rounded_uncertainty(&self) -> f64 {
        self.uncertainty.round()
    }

    /// R² as presented, with "not requested" folded into undefined
    pub fn presented_r_squared(&self) -> Statistic {
        self.r_squared
            .unwrap_or(Statistic::Undefined)
            .rounded(precision::R_SQUARED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32, category: &str, metric: &str) -> ForecastRow {
        ForecastRow {
            year,
            category: category.to_string(),
            metric: metric.to_string(),
            horizon: 1,
            forecast: 100.4,
            uncertainty: 10.6,
            cv: None,
            r_squared: None,
            mape: Statistic::Undefined,
        }
    }

    #[test]
    fn test_key_ordering() {
        let a = row(2026, "Migration", "Net migration");
        let b = row(2026, "Work Permits", "Study permit");
        let c = row(2027, "Foreign Workers", "Total workers");
        assert_eq!(a.cmp_key(&b), Ordering::Less);
        assert_eq!(b.cmp_key(&c), Ordering::Less);
        assert_eq!(a.cmp_key(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_band_and_rounding() {
        let r = row(2026, "a", "b");
        assert!((r.lower() - 89.8).abs() < 1e-9);
        assert!((r.upper() - 111.0).abs() < 1e-9);
        assert_eq!(r.rounded_forecast(), 100.0);
        assert_eq!(r.rounded_uncertainty(), 11.0);
        assert_eq!(r.presented_r_squared(), Statistic::Undefined);
    }

    #[test]
    fn test_presented_r_squared_is_rounded() {
        let mut r = row(2026, "a", "b");
        r.r_squared = Some(Statistic::Value(0.89961));
        assert_eq!(r.presented_r_squared(), Statistic::Value(0.9));
    }
}
