//! Statistic model
//!
//! A numeric diagnostic that may be mathematically undefined (zero-mean CV,
//! all-zero MAPE, zero-variance R², relative uncertainty of a zero forecast).

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A finite value or an explicit "undefined" sentinel
///
/// Non-finite floats never live inside [`Statistic::Value`]; converting one
/// with [`Statistic::from`] yields [`Statistic::Undefined`]. Serializes as a
/// number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Statistic {
    Value(f64),
    #[default]
    Undefined,
}

impl Statistic {
    /// The finite value, if defined
    pub fn value(self) -> Option<f64> {
        match self {
            Statistic::Value(v) => Some(v),
            Statistic::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Statistic::Value(_))
    }

    /// The value, or `UndefinedStatistic` naming what was asked for
    pub fn require(self, what: &str) -> Result<f64> {
        self.value()
            .ok_or_else(|| ForecastError::UndefinedStatistic(what.to_string()))
    }

    /// Apply `f` to a defined value; the result is re-checked for finiteness
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Statistic::Value(v) => Statistic::from(f(v)),
            Statistic::Undefined => Statistic::Undefined,
        }
    }

    /// Round to a fixed number of decimals (half away from zero)
    pub fn rounded(self, decimals: u32) -> Self {
        self.map(|v| round_to(v, decimals))
    }

    /// Total order with `Undefined` after every defined value
    pub fn cmp_undefined_last(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Statistic::Value(a), Statistic::Value(b)) => a.total_cmp(b),
            (Statistic::Value(_), Statistic::Undefined) => Ordering::Less,
            (Statistic::Undefined, Statistic::Value(_)) => Ordering::Greater,
            (Statistic::Undefined, Statistic::Undefined) => Ordering::Equal,
        }
    }
}

impl From<f64> for Statistic {
    fn from(v: f64) -> Self {
        if v.is_finite() {
            Statistic::Value(v)
        } else {
            Statistic::Undefined
        }
    }
}

impl From<Option<f64>> for Statistic {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Statistic::Undefined, Statistic::from)
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Value(v) => write!(f, "{}", v),
            Statistic::Undefined => write!(f, "undefined"),
        }
    }
}

impl Serialize for Statistic {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Statistic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Option::<f64>::deserialize(deserializer).map(Statistic::from)
    }
}

/// Round `v` to `decimals` places, half away from zero
pub fn round_to(v: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (v * factor).round() / factor
}
