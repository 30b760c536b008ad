//! Quickstart example demonstrating the full analysis pipeline.
//!
//! Run with: cargo run --example quickstart

use chrono::{Duration, TimeZone, Utc};
use renewable_analytics::ingest::{normalize, RawTable};
use renewable_analytics::pipeline::{run_analysis, AnalysisConfig};

fn main() {
    println!("=== renewable-analytics Quickstart ===\n");

    // 1. Build a raw table the way a CSV export would look: messy headers,
    //    string cells, a couple of rows that will not survive cleaning.
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let mut table = RawTable::new(vec![
        " Date ".to_string(),
        "Energy_MWh".to_string(),
        "Fuel Type".to_string(),
    ]);

    for i in 0..14 * 24 {
        let ts = base + Duration::hours(i);
        // Daily cycle with a weekly swell and a little ripple.
        let value = 900.0
            + 300.0 * ((i % 24) as f64 * std::f64::consts::TAU / 24.0).sin()
            + 80.0 * ((i / 24 % 7) as f64)
            + (i % 5) as f64;
        let source = if i % 2 == 0 { "wind" } else { "solar" };
        table
            .push_row(vec![
                ts.format("%Y-%m-%d %H:%M:%S").to_string(),
                format!("{value:.1}"),
                source.to_string(),
            ])
            .unwrap();
    }
    table
        .push_row(vec!["broken".into(), "1.0".into(), "wind".into()])
        .unwrap();
    table
        .push_row(vec!["2024-03-15 00:00:00".into(), "-10.0".into(), "wind".into()])
        .unwrap();

    // 2. Normalize into a clean series.
    let series = normalize(&table).unwrap();
    println!(
        "Cleaned {} raw rows into {} observations",
        table.len(),
        series.len()
    );

    // 3. Run the fixed analysis sequence.
    let report = run_analysis(&series, &AnalysisConfig::default()).unwrap();

    println!("\n--- Hourly Pattern (mean MWh per hour of day) ---");
    for (hour, mean) in &report.hourly_means {
        println!("  {hour:>2}:00  {mean:>8.1}");
    }

    println!("\n--- Weekday vs Weekend ---");
    for (day_type, mean) in &report.day_type_means {
        println!("  {day_type:?}: {mean:.1}");
    }

    println!("\n--- Production per Source ---");
    for (source, total) in &report.source_totals {
        println!("  {source}: {total:.0} MWh total");
    }

    if let Some(baselines) = &report.baselines {
        println!("\n--- Baseline Forecasts over {} held-out hours ---", baselines.actual.len());
        for model in [&baselines.naive, &baselines.window_average] {
            println!(
                "  {:<14} MAE {:>8.2}   RMSE {:>8.2}",
                model.name, model.metrics.mae, model.metrics.rmse
            );
        }
    }

    println!(
        "\nOutliers: {} ({:.1}%), anomalies: {}",
        report.outliers.outlier_count(),
        report.outliers.outlier_percentage(),
        report.anomalies.anomaly_count()
    );
}
