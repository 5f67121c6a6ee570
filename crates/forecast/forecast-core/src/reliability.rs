//! Rule-based reliability classification
//!
//! Tiers come from an ordered list of rules over (uncertainty %, R²). The
//! first rule that matches wins; a forecast that matches none falls back to
//! `Very Low Reliability`, and one with undefined uncertainty % is `Unknown`.

use forecast_spi::{
    ForecastTable, ReliabilityClassifier, ReliabilityRow, ReliabilityTier, Statistic,
};
use serde::{Deserialize, Serialize};

/// One row of the tier table
///
/// Matches when uncertainty % is at most `max_uncertainty_pct` and, if
/// `min_r_squared` is set, R² is defined and at least that value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityRule {
    pub max_uncertainty_pct: f64,
    #[serde(default)]
    pub min_r_squared: Option<f64>,
    pub tier: ReliabilityTier,
}

impl ReliabilityRule {
    pub fn new(max_uncertainty_pct: f64, min_r_squared: Option<f64>, tier: ReliabilityTier) -> Self {
        Self {
            max_uncertainty_pct,
            min_r_squared,
            tier,
        }
    }

    pub fn matches(&self, uncertainty_pct: f64, r_squared: Statistic) -> bool {
        if uncertainty_pct > self.max_uncertainty_pct {
            return false;
        }
        match (self.min_r_squared, r_squared) {
            (None, _) => true,
            (Some(min), Statistic::Value(r2)) => r2 >= min,
            (Some(_), Statistic::Undefined) => false,
        }
    }
}

/// The default tier table
pub fn default_rules() -> Vec<ReliabilityRule> {
    vec![
        ReliabilityRule::new(10.0, Some(0.9), ReliabilityTier::High),
        ReliabilityRule::new(25.0, Some(0.7), ReliabilityTier::Good),
        ReliabilityRule::new(40.0, Some(0.5), ReliabilityTier::Moderate),
        ReliabilityRule::new(60.0, None, ReliabilityTier::Low),
    ]
}

/// Classifier evaluating an ordered rule list, first match wins
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBasedClassifier {
    rules: Vec<ReliabilityRule>,
    fallback: ReliabilityTier,
}

impl Default for RuleBasedClassifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl RuleBasedClassifier {
    pub fn new(rules: Vec<ReliabilityRule>) -> Self {
        Self {
            rules,
            fallback: ReliabilityTier::VeryLow,
        }
    }

    /// Tier used when no rule matches
    pub fn with_fallback(mut self, fallback: ReliabilityTier) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn rules(&self) -> &[ReliabilityRule] {
        &self.rules
    }

    /// Assess every row of a table, in table order
    pub fn assess_table(&self, table: &ForecastTable) -> Vec<ReliabilityRow> {
        table.iter().map(|row| self.assess(row)).collect()
    }
}

impl ReliabilityClassifier for RuleBasedClassifier {
    fn classify(&self, uncertainty_pct: Statistic, r_squared: Statistic) -> ReliabilityTier {
        let Some(pct) = uncertainty_pct.value() else {
            return ReliabilityTier::Unknown;
        };
        self.rules
            .iter()
            .find(|rule| rule.matches(pct, r_squared))
            .map_or(self.fallback, |rule| rule.tier)
    }
}
