//! Model module containing data structures

mod fit_result;
mod forecast_row;
mod forecast_table;
mod metric_series;
mod reliability;
mod statistic;

pub use fit_result::FitResult;
pub use forecast_row::{precision, ForecastRow};
pub use forecast_table::{BandPoint, ForecastTable};
pub use metric_series::{HistoricalGroup, MetricSeries};
pub use reliability::{ReliabilityRow, ReliabilityTier};
pub use statistic::{round_to, Statistic};
