//! Reliability assessment model

use super::{ForecastRow, Statistic};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative reliability of a forecast
///
/// Declared from most to least reliable; `Unknown` marks forecasts whose
/// relative uncertainty is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReliabilityTier {
    #[serde(rename = "High Reliability")]
    High,
    #[serde(rename = "Good Reliability")]
    Good,
    #[serde(rename = "Moderate Reliability")]
    Moderate,
    #[serde(rename = "Low Reliability")]
    Low,
    #[serde(rename = "Very Low Reliability")]
    VeryLow,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl ReliabilityTier {
    pub const ALL: [ReliabilityTier; 6] = [
        ReliabilityTier::High,
        ReliabilityTier::Good,
        ReliabilityTier::Moderate,
        ReliabilityTier::Low,
        ReliabilityTier::VeryLow,
        ReliabilityTier::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReliabilityTier::High => "High Reliability",
            ReliabilityTier::Good => "Good Reliability",
            ReliabilityTier::Moderate => "Moderate Reliability",
            ReliabilityTier::Low => "Low Reliability",
            ReliabilityTier::VeryLow => "Very Low Reliability",
            ReliabilityTier::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ReliabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A forecast row with its relative uncertainty and reliability tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityRow {
    pub row: ForecastRow,
    /// Uncertainty as a percentage of |forecast|
    pub uncertainty_pct: Statistic,
    pub tier: ReliabilityTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(ReliabilityTier::High.to_string(), "High Reliability");
        assert_eq!(ReliabilityTier::VeryLow.to_string(), "Very Low Reliability");
        assert_eq!(ReliabilityTier::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&ReliabilityTier::Moderate).unwrap();
        assert_eq!(json, "\"Moderate Reliability\"");

        let tier: ReliabilityTier = serde_json::from_str("\"Low Reliability\"").unwrap();
        assert_eq!(tier, ReliabilityTier::Low);
    }

    #[test]
    fn test_order_is_most_to_least_reliable() {
        assert!(ReliabilityTier::High < ReliabilityTier::Good);
        assert!(ReliabilityTier::VeryLow < ReliabilityTier::Unknown);
        for tier in ReliabilityTier::ALL {
            assert_eq!(
                serde_json::to_string(&tier).unwrap(),
                format!("\"{}\"", tier.label())
            );
        }
    }
}
