//! Basic example: forecast a handful of yearly metrics and grade them
//!
//! Run with: cargo run --example basic -p forecast-facade
//! Set RUST_LOG=forecast_core=debug to see per-metric fits.

use forecast_facade::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "basic=info,forecast_core=info,forecast_api=info".into()),
        )
        .init();

    println!("=== trendcast Basic Example ===\n");

    let years = vec![2021, 2022, 2023, 2024, 2025];
    let groups = vec![
        HistoricalGroup::new("Foreign Workers", years.clone())
            .with_column("Full time third country workers", vec![2910.0, 3380.0, 3920.0, 4230.0, 4660.0])
            .with_column("Full time EU workers", vec![4100.0, 4420.0, 4380.0, 4720.0, 5010.0]),
        HistoricalGroup::new("Work Permits", years)
            .with_column("Study permit", vec![410.0, 380.0, 450.0, 470.0, 430.0])
            .with_sparse_column("Ukraine Emergency Law", vec![None, Some(2100.0), Some(900.0), Some(400.0), Some(250.0)]),
    ];

    let targets = TargetColumns::from([
        (
            "Foreign Workers".to_string(),
            vec![
                "Full time third country workers".to_string(),
                "Full time EU workers".to_string(),
            ],
        ),
        (
            "Work Permits".to_string(),
            vec![
                "Study permit".to_string(),
                "Ukraine Emergency Law".to_string(),
            ],
        ),
    ]);

    // 1. Configure
    let config = ForecastConfig::from_json_str(r#"{ "horizon": 3 }"#)?;
    let engine = ForecastEngine::from_config(&config)?;

    // 2. Forecast and assess
    let run = engine.run(&groups, &targets)?;
    tracing::info!(
        rows = run.table.len(),
        skipped = run.skipped.len(),
        horizon = engine.horizon(),
        "forecast run complete"
    );
    for skipped in &run.skipped {
        println!("Skipped {} / {}: {}", skipped.category, skipped.metric, skipped.reason);
    }

    // 3. Band for one metric
    println!("\nFull time EU workers:");
    for point in run.table.band("Foreign Workers", "Full time EU workers") {
        println!(
            "   {}: {:.0} [{:.0}, {:.0}]",
            point.year, point.forecast, point.lower, point.upper
        );
    }

    // 4. Rankings
    println!("\nMost reliable in 2026:");
    for row in run.most_reliable(2026, 3) {
        println!("   {} ({}): {}", row.row.metric, row.uncertainty_pct, row.tier);
    }

    // 5. Published table
    println!("\nReliability table:");
    println!("{}", serde_json::to_string_pretty(&run.export_reliability())?);

    Ok(())
}
