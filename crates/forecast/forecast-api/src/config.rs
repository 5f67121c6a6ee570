//! Engine configuration
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "horizon": 3, "uncertainty": { "floor": 25.0 } }
//! ```

use forecast_core::reliability::default_rules;
use forecast_core::table::DEFAULT_HORIZON;
use forecast_core::uncertainty::{DEFAULT_FLOOR, DEFAULT_FLOOR_THRESHOLD, DEFAULT_MAX_FRACTION};
use forecast_core::{BoundedUncertainty, ReliabilityRule, RuleBasedClassifier};
use forecast_spi::{ForecastError, ReliabilityTier, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Configuration for a forecasting run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of years to forecast
    pub horizon: usize,
    /// Whether rows carry the coefficient of variation
    pub include_cv: bool,
    /// Whether rows carry R²
    pub include_r2: bool,
    pub uncertainty: UncertaintyConfig,
    pub reliability: ReliabilityConfig,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            include_cv: true,
            include_r2: true,
            uncertainty: UncertaintyConfig::default(),
            reliability: ReliabilityConfig::default(),
        }
    }
}

/// Configuration for uncertainty bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UncertaintyConfig {
    /// Cap as a fraction of |forecast| (0.5 for 50%)
    pub max_fraction: f64,
    /// Minimum uncertainty for small forecasts
    pub floor: f64,
    /// Forecasts with |value| below this receive the floor
    pub floor_threshold: f64,
}

impl Default for UncertaintyConfig {
    fn default() -> Self {
        Self {
            max_fraction: DEFAULT_MAX_FRACTION,
            floor: DEFAULT_FLOOR,
            floor_threshold: DEFAULT_FLOOR_THRESHOLD,
        }
    }
}

impl From<UncertaintyConfig> for BoundedUncertainty {
    fn from(config: UncertaintyConfig) -> Self {
        BoundedUncertainty::new(config.max_fraction, config.floor, config.floor_threshold)
    }
}

/// Configuration for reliability tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliabilityConfig {
    /// Evaluated in order, first match wins
    pub rules: Vec<ReliabilityRule>,
    /// Tier when no rule matches
    pub fallback: ReliabilityTier,
}

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            fallback: ReliabilityTier::VeryLow,
        }
    }
}

impl From<&ReliabilityConfig> for RuleBasedClassifier {
    fn from(config: &ReliabilityConfig) -> Self {
        RuleBasedClassifier::new(config.rules.clone()).with_fallback(config.fallback)
    }
}

impl ForecastConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ForecastError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: Self =
            serde_json::from_reader(reader).map_err(|e| ForecastError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ForecastError::Config(e.to_string()))
    }

    /// Check values that would make a run meaningless
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(invalid("horizon", "must be at least 1"));
        }

        let u = &self.uncertainty;
        for (name, value) in [
            ("uncertainty.max_fraction", u.max_fraction),
            ("uncertainty.floor", u.floor),
            ("uncertainty.floor_threshold", u.floor_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(name, "must be a finite, non-negative number"));
            }
        }

        if self.reliability.rules.is_empty() {
            return Err(invalid("reliability.rules", "must contain at least one rule"));
        }
        for (i, rule) in self.reliability.rules.iter().enumerate() {
            let bad_r2 = rule.min_r_squared.is_some_and(|r2| !r2.is_finite());
            if rule.max_uncertainty_pct.is_nan() || bad_r2 {
                return Err(invalid(
                    &format!("reliability.rules[{}]", i),
                    "thresholds must be numbers",
                ));
            }
        }

        Ok(())
    }
}

fn invalid(name: &str, reason: &str) -> ForecastError {
    ForecastError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
