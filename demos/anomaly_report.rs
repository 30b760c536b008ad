//! Anomaly and outlier reporting example.
//!
//! Run with: cargo run --example anomaly_report

use chrono::{Duration, TimeZone, Utc};
use renewable_analytics::core::Series;
use renewable_analytics::detect::{detect_anomalies, AnomalyConfig};
use renewable_analytics::stats::detect_outliers;

fn main() {
    println!("=== Anomaly & Outlier Report ===\n");

    // Four days of hourly production with three injected faults.
    let n = 4 * 24;
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let timestamps: Vec<_> = (0..n).map(|i| base + Duration::hours(i as i64)).collect();

    let mut values: Vec<f64> = (0..n)
        .map(|i| 500.0 + 150.0 * ((i % 24) as f64 * std::f64::consts::TAU / 24.0).sin())
        .collect();
    values[30] = 4_000.0; // sensor spike
    values[55] = 0.0; // dropout
    values[80] = 3_500.0; // second spike

    let series = Series::from_values(timestamps, values).unwrap();
    println!("Generated {} observations with 3 injected faults\n", n);

    // Global lens: IQR bounds over the whole series.
    let outliers = detect_outliers(&series).unwrap();
    println!(
        "IQR bounds: [{:.1}, {:.1}] (q1 {:.1}, q3 {:.1})",
        outliers.bounds.lower, outliers.bounds.upper, outliers.bounds.q1, outliers.bounds.q3
    );
    println!("Outliers flagged: {}", outliers.outlier_count());
    for obs in &outliers.outliers {
        println!("  {}  {:>8.1} MWh", obs.timestamp.format("%Y-%m-%d %H:%M"), obs.value);
    }

    // Local lens: deviation from the trailing daily rolling mean.
    let report = detect_anomalies(&series, &AnomalyConfig::default()).unwrap();
    println!("\nRolling anomalies flagged: {}", report.anomaly_count());
    for obs in &report.anomalies {
        println!("  {}  {:>8.1} MWh", obs.timestamp.format("%Y-%m-%d %H:%M"), obs.value);
    }

    println!("\nThe two passes are independent: the IQR lens judges against");
    println!("the whole series, the rolling lens against the trailing day.");
}
