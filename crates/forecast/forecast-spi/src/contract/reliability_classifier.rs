//! Trait for reliability classification

use crate::model::{ForecastRow, ReliabilityRow, ReliabilityTier, Statistic};

/// Assigns a reliability tier from relative uncertainty and fit quality
pub trait ReliabilityClassifier: Send + Sync {
    /// Tier for a forecast with the given uncertainty % and R²
    fn classify(&self, uncertainty_pct: Statistic, r_squared: Statistic) -> ReliabilityTier;

    /// Uncertainty as a percentage of |forecast|
    ///
    /// Uses the presented (rounded) forecast and uncertainty so a reliability
    /// table agrees with the forecast table it was derived from. A forecast
    /// that rounds to zero gives `Undefined`.
    fn uncertainty_pct(&self, row: &ForecastRow) -> Statistic {
        let forecast = row.rounded_forecast().abs();
        if forecast == 0.0 {
            return Statistic::Undefined;
        }
        Statistic::from(row.rounded_uncertainty().abs() / forecast * 100.0)
    }

    /// Derive a reliability row; the input row is copied, never modified
    ///
    /// R² is compared as presented (three decimals), like the forecast and
    /// uncertainty behind the percentage.
    fn assess(&self, row: &ForecastRow) -> ReliabilityRow {
        let uncertainty_pct = self.uncertainty_pct(row);
        let tier = self.classify(uncertainty_pct, row.presented_r_squared());
        ReliabilityRow {
            row: row.clone(),
            uncertainty_pct,
            tier,
        }
    }
}
