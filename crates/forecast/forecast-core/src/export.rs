//! Presentation rows for exporting collaborators
//!
//! Column names and rounding of the published tables. Undefined statistics
//! serialize as `null`; columns that were not requested are omitted.

use forecast_spi::{precision, ForecastRow, ForecastTable, ReliabilityRow, ReliabilityTier, Statistic};
use serde::Serialize;

/// One row of the forecast table as published
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Forecast")]
    pub forecast: i64,
    #[serde(rename = "Uncertainty (±)")]
    pub uncertainty: i64,
    #[serde(rename = "CV (%)", skip_serializing_if = "Option::is_none")]
    pub cv: Option<Statistic>,
    #[serde(rename = "R²", skip_serializing_if = "Option::is_none")]
    pub r_squared: Option<Statistic>,
    #[serde(rename = "MAPE (%)")]
    pub mape: Statistic,
}

impl From<&ForecastRow> for ExportRow {
    fn from(row: &ForecastRow) -> Self {
        Self {
            year: row.year,
            category: row.category.clone(),
            metric: row.metric.clone(),
            forecast: row.rounded_forecast() as i64,
            uncertainty: row.rounded_uncertainty() as i64,
            cv: row.cv.map(|s| s.rounded(precision::CV)),
            r_squared: row.r_squared.map(|s| s.rounded(precision::R_SQUARED)),
            mape: row.mape.rounded(precision::MAPE),
        }
    }
}

/// One row of the reliability table as published
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReliabilityExportRow {
    #[serde(flatten)]
    pub forecast: ExportRow,
    #[serde(rename = "Uncertainty (%)")]
    pub uncertainty_pct: Statistic,
    #[serde(rename = "Reliability")]
    pub tier: ReliabilityTier,
}

impl From<&ReliabilityRow> for ReliabilityExportRow {
    fn from(row: &ReliabilityRow) -> Self {
        Self {
            forecast: ExportRow::from(&row.row),
            uncertainty_pct: row.uncertainty_pct.rounded(precision::UNCERTAINTY_PCT),
            tier: row.tier,
        }
    }
}

pub fn export_table(table: &ForecastTable) -> Vec<ExportRow> {
    table.iter().map(ExportRow::from).collect()
}

pub fn export_reliability(rows: &[ReliabilityRow]) -> Vec<ReliabilityExportRow> {
    rows.iter().map(ReliabilityExportRow::from).collect()
}
