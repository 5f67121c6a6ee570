//! Bounded forecast uncertainty
//!
//! The ± band of a forecast `k` years out starts at `MAE * sqrt(k)`, is capped
//! at a fraction of |forecast|, and is then raised to a fixed floor when the
//! forecast is small. The cap applies before the floor, so a small forecast
//! can carry more than the capped fraction.

use forecast_spi::UncertaintyEstimator;
use serde::{Deserialize, Serialize};

/// Default cap: half of |forecast|
pub const DEFAULT_MAX_FRACTION: f64 = 0.5;
/// Default minimum uncertainty for small forecasts, native units
pub const DEFAULT_FLOOR: f64 = 50.0;
/// Forecasts with |value| below this get the floor
pub const DEFAULT_FLOOR_THRESHOLD: f64 = 1000.0;

/// Square-root growth with a relative cap and an absolute floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundedUncertainty {
    pub max_fraction: f64,
    pub floor: f64,
    pub floor_threshold: f64,
}

impl Default for BoundedUncertainty {
    fn default() -> Self {
        Self {
            max_fraction: DEFAULT_MAX_FRACTION,
            floor: DEFAULT_FLOOR,
            floor_threshold: DEFAULT_FLOOR_THRESHOLD,
        }
    }
}

impl BoundedUncertainty {
    pub fn new(max_fraction: f64, floor: f64, floor_threshold: f64) -> Self {
        Self {
            max_fraction,
            floor,
            floor_threshold,
        }
    }

    /// Uncapped uncertainty: MAE scaled by sqrt(step)
    pub fn base(mae: f64, step: usize) -> f64 {
        mae * (step as f64).sqrt()
    }

    /// Largest uncertainty allowed by the cap for this forecast
    pub fn cap(&self, forecast: f64) -> f64 {
        forecast.abs() * self.max_fraction
    }
}

impl UncertaintyEstimator for BoundedUncertainty {
    fn estimate(&self, mae: f64, step: usize, forecast: f64) -> f64 {
        let capped = Self::base(mae, step).min(self.cap(forecast));
        if forecast.abs() < self.floor_threshold {
            capped.max(self.floor)
        } else {
            capped
        }
    }
}
