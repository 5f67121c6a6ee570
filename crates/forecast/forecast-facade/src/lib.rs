//! Forecast Facade
//!
//! High-level API for trend forecasting. Re-exports all public types from the
//! forecast stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use forecast_facade::prelude::*;
//!
//! let group = HistoricalGroup::new("Migration", vec![2021, 2022, 2023, 2024, 2025])
//!     .with_column("Net migration", vec![1200.0, 1350.0, 1280.0, 1500.0, 1610.0]);
//! let targets = TargetColumns::from([(
//!     "Migration".to_string(),
//!     vec!["Net migration".to_string()],
//! )]);
//!
//! let run = ForecastEngine::new().run(&[group], &targets).unwrap();
//! assert_eq!(run.table.len(), 5);
//! ```

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{export, metrics, reliability, summary, table, trend, uncertainty};
