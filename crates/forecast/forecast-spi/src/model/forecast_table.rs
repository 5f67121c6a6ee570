//! Forecast table model

use super::ForecastRow;
use serde::{Deserialize, Deserializer, Serialize};

/// Forecast rows, unique on and sorted by (year, category, metric)
///
/// Deserialized tables are normalized like [`ForecastTable::from_rows`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForecastTable {
    rows: Vec<ForecastRow>,
}

/// One point of a forecast band, for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    pub year: i32,
    pub lower: f64,
    pub forecast: f64,
    pub upper: f64,
}

impl ForecastTable {
    /// Normalize `rows` into a table
    ///
    /// Rows are sorted by key; for duplicate keys the first row in input order
    /// is kept.
    pub fn from_rows(mut rows: Vec<ForecastRow>) -> Self {
        rows.sort_by(|a, b| a.cmp_key(b));
        rows.dedup_by(|later, earlier| later.key() == earlier.key());
        Self { rows }
    }

    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ForecastRow> {
        self.rows.iter()
    }

    pub fn get(&self, year: i32, category: &str, metric: &str) -> Option<&ForecastRow> {
        self.rows
            .binary_search_by(|r| r.key().cmp(&(year, category, metric)))
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Rows for a single forecast year
    pub fn for_year(&self, year: i32) -> impl Iterator<Item = &ForecastRow> {
        self.rows.iter().filter(move |r| r.year == year)
    }

    /// Rows for a single metric, in year order
    pub fn for_metric<'a>(
        &'a self,
        category: &'a str,
        metric: &'a str,
    ) -> impl Iterator<Item = &'a ForecastRow> {
        self.rows
            .iter()
            .filter(move |r| r.category == category && r.metric == metric)
    }

    /// Lower/forecast/upper points of one metric's band
    pub fn band(&self, category: &str, metric: &str) -> Vec<BandPoint> {
        self.for_metric(category, metric)
            .map(|r| BandPoint {
                year: r.year,
                lower: r.lower(),
                forecast: r.forecast,
                upper: r.upper(),
            })
            .collect()
    }

    /// Distinct (category, metric) pairs present, sorted
    pub fn metrics(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .rows
            .iter()
            .map(|r| (r.category.as_str(), r.metric.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs.dedup();
        pairs
    }

    pub fn first_year(&self) -> Option<i32> {
        self.rows.first().map(|r| r.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.rows.last().map(|r| r.year)
    }
}

impl<'de> Deserialize<'de> for ForecastTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            rows: Vec<ForecastRow>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::from_rows(raw.rows))
    }
}

impl<'a> IntoIterator for &'a ForecastTable {
    type Item = &'a ForecastRow;
    type IntoIter = std::slice::Iter<'a, ForecastRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
