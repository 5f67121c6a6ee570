//! Trait for forecast uncertainty estimation

/// Derives the ± uncertainty of a point forecast
pub trait UncertaintyEstimator: Send + Sync {
    /// Uncertainty for a forecast `step` years past the fitted range
    ///
    /// `mae` is the fit's mean absolute residual; `step` starts at 1.
    fn estimate(&self, mae: f64, step: usize, forecast: f64) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock implementation: residual error grows linearly with the step
    struct LinearGrowth;

    impl UncertaintyEstimator for LinearGrowth {
        fn estimate(&self, mae: f64, step: usize, _forecast: f64) -> f64 {
            mae * step as f64
        }
    }

    #[test]
    fn test_mock_estimator() {
        let estimator: Box<dyn UncertaintyEstimator> = Box::new(LinearGrowth);
        assert_eq!(estimator.estimate(2.0, 3, 100.0), 6.0);
    }
}
