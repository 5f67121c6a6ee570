//! Historical input model

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One metric's annual observations, years strictly increasing
///
/// Deserialization applies the same checks as [`MetricSeries::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    years: Vec<i32>,
    values: Vec<f64>,
}

impl MetricSeries {
    /// Build a series from parallel year/value columns
    ///
    /// Fails with `InvalidSeries` when the lengths differ, the years are not
    /// strictly increasing, or a value is not finite.
    pub fn new(years: Vec<i32>, values: Vec<f64>) -> Result<Self> {
        if years.len() != values.len() {
            return Err(ForecastError::InvalidSeries(format!(
                "{} years but {} values",
                years.len(),
                values.len()
            )));
        }
        if let Some(w) = years.windows(2).find(|w| w[1] <= w[0]) {
            return Err(ForecastError::InvalidSeries(format!(
                "years must be strictly increasing ({} then {})",
                w[0], w[1]
            )));
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ForecastError::InvalidSeries(format!(
                "value at row {} is not finite ({})",
                index, values[index]
            )));
        }
        Ok(Self { years, values })
    }

    /// Build a series from (year, value) pairs
    pub fn from_points(points: &[(i32, f64)]) -> Result<Self> {
        let (years, values): (Vec<i32>, Vec<f64>) = points.iter().copied().unzip();
        Self::new(years, values)
    }

    /// Build a series from a column that may contain missing values
    ///
    /// Any `None` (or NaN) excludes the whole series; nothing is imputed.
    /// An infinite value is rejected as `InvalidSeries`.
    pub fn from_column(column: &str, years: &[i32], values: &[Option<f64>]) -> Result<Self> {
        let mut present = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            match value {
                Some(v) if v.is_finite() => present.push(*v),
                Some(v) if v.is_infinite() => {
                    return Err(ForecastError::InvalidSeries(format!(
                        "column '{}' has an infinite value at row {}",
                        column, index
                    )))
                }
                _ => {
                    return Err(ForecastError::MissingValue {
                        column: column.to_string(),
                        index,
                    })
                }
            }
        }
        Self::new(years.to_vec(), present)
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Last observed year
    pub fn last_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    /// Iterate over (year, value) pairs
    pub fn points(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.years.iter().copied().zip(self.values.iter().copied())
    }
}

impl<'de> Deserialize<'de> for MetricSeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            years: Vec<i32>,
            values: Vec<f64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        MetricSeries::new(raw.years, raw.values).map_err(serde::de::Error::custom)
    }
}

/// A named group of historical columns sharing one `Year` column
///
/// This is the hand-off shape from the ingestion layer: one group per
/// category (e.g. "Migration"), with raw columns that may contain gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalGroup {
    pub category: String,
    pub years: Vec<i32>,
    pub columns: BTreeMap<String, Vec<Option<f64>>>,
}

impl HistoricalGroup {
    pub fn new(category: impl Into<String>, years: Vec<i32>) -> Self {
        Self {
            category: category.into(),
            years,
            columns: BTreeMap::new(),
        }
    }

    /// Add a fully observed column
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns
            .insert(name.into(), values.into_iter().map(Some).collect());
        self
    }

    /// Add a column that may contain missing values
    pub fn with_sparse_column(mut self, name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        self.columns.insert(name.into(), values);
        self
    }

    pub fn last_year(&self) -> Option<i32> {
        self.years.iter().copied().max()
    }

    /// Extract one column as a validated series
    pub fn series(&self, column: &str) -> Result<MetricSeries> {
        let values = self
            .columns
            .get(column)
            .ok_or_else(|| ForecastError::MissingColumn {
                category: self.category.clone(),
                column: column.to_string(),
            })?;
        MetricSeries::from_column(column, &self.years, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_from_points() {
        let series = MetricSeries::from_points(&[(2021, 1.0), (2022, 2.0), (2024, 4.0)]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.years(), &[2021, 2022, 2024]);
        assert_eq!(series.last_year(), Some(2024));
    }

    #[test]
    fn test_series_rejects_unsorted_years() {
        let err = MetricSeries::new(vec![2022, 2021], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidSeries(_)));

        let err = MetricSeries::new(vec![2021, 2021], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidSeries(_)));
    }

    #[test]
    fn test_series_rejects_length_mismatch() {
        let err = MetricSeries::new(vec![2021, 2022, 2023], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidSeries(_)));
    }

    #[test]
    fn test_column_with_gap_is_excluded() {
        let err = MetricSeries::from_column("Study permit", &[2021, 2022, 2023], &[
            Some(1.0),
            None,
            Some(3.0),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ForecastError::MissingValue {
                column: "Study permit".to_string(),
                index: 1
            }
        );
    }

    #[test]
    fn test_nan_counts_as_missing() {
        let err = MetricSeries::from_column("x", &[2021, 2022], &[Some(f64::NAN), Some(1.0)])
            .unwrap_err();
        assert!(matches!(err, ForecastError::MissingValue { index: 0, .. }));
    }

    #[test]
    fn test_infinite_values_are_rejected() {
        let err = MetricSeries::from_column("Net migration", &[2021, 2022], &[
            Some(1.0),
            Some(f64::INFINITY),
        ])
        .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidSeries(ref m) if m.contains("Net migration")));

        let err = MetricSeries::new(vec![2021, 2022], vec![f64::NEG_INFINITY, 1.0]).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidSeries(_)));
    }

    #[test]
    fn test_non_finite_message_names_the_row() {
        let err = MetricSeries::new(vec![2021, 2022], vec![1.0, f64::NAN]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid series: value at row 1 is not finite (NaN)");
    }

    #[test]
    fn test_deserialize_validates() {
        let series: MetricSeries =
            serde_json::from_str(r#"{ "years": [2024, 2025], "values": [1.0, 2.0] }"#).unwrap();
        assert_eq!(series.len(), 2);

        let unsorted =
            serde_json::from_str::<MetricSeries>(r#"{ "years": [2025, 2024], "values": [1.0, 2.0] }"#);
        assert!(unsorted.is_err());

        let mismatched =
            serde_json::from_str::<MetricSeries>(r#"{ "years": [2024], "values": [1.0, 2.0] }"#);
        assert!(mismatched.is_err());
    }

    #[test]
    fn test_group_series_lookup() {
        let group = HistoricalGroup::new("Migration", vec![2024, 2025])
            .with_column("Immigration", vec![10.0, 12.0]);

        let series = group.series("Immigration").unwrap();
        assert_eq!(series.values(), &[10.0, 12.0]);

        let err = group.series("Emigration").unwrap_err();
        assert!(matches!(err, ForecastError::MissingColumn { .. }));
    }

    #[test]
    fn test_group_last_year() {
        let group = HistoricalGroup::new("Permits", vec![2021, 2022, 2023]);
        assert_eq!(group.last_year(), Some(2023));
        assert_eq!(HistoricalGroup::new("Empty", vec![]).last_year(), None);
    }
}
