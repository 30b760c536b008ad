//! Rolling mean/std deviation-based anomaly flagging.
//!
//! A point is anomalous when its distance from the trailing rolling mean
//! exceeds `threshold` rolling standard deviations. The first `window - 1`
//! points have no defined rolling statistics and are never flagged.

use crate::core::{Observation, Series};
use crate::error::{AnalysisError, Result};
use crate::stats::{rolling_mean, rolling_std};

/// Configuration for rolling-window anomaly detection.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyConfig {
    /// Rolling window size.
    pub window: usize,
    /// Threshold multiplier on the rolling standard deviation.
    pub threshold: f64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            window: 24,
            threshold: 3.0,
        }
    }
}

impl AnomalyConfig {
    pub fn new(window: usize, threshold: f64) -> Self {
        Self { window, threshold }
    }
}

/// Result of an anomaly detection pass.
#[derive(Debug, Clone)]
pub struct AnomalyReport {
    /// Positions of the anomalies in the input series.
    pub indices: Vec<usize>,
    /// The flagged observations, preserving original timestamps.
    pub anomalies: Vec<Observation>,
    /// Configuration the pass ran with.
    pub config: AnomalyConfig,
}

impl AnomalyReport {
    pub fn anomaly_count(&self) -> usize {
        self.indices.len()
    }

    pub fn is_anomaly(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }
}

/// Flag observations whose deviation from the rolling mean exceeds
/// `threshold * rolling_std`.
pub fn detect_anomalies(series: &Series, config: &AnomalyConfig) -> Result<AnomalyReport> {
    if config.window < 2 {
        return Err(AnalysisError::InvalidParameter(
            "anomaly window must be at least 2".to_string(),
        ));
    }
    if config.threshold <= 0.0 {
        return Err(AnalysisError::InvalidParameter(
            "anomaly threshold must be positive".to_string(),
        ));
    }

    let values = series.values();
    let means = rolling_mean(values, config.window);
    let stds = rolling_std(values, config.window);

    let mut indices = Vec::new();
    let mut anomalies = Vec::new();
    for (i, value) in values.iter().enumerate() {
        // Skip the warmup region where the rolling statistics are undefined.
        if means[i].is_nan() || stds[i].is_nan() {
            continue;
        }
        if (value - means[i]).abs() > config.threshold * stds[i] {
            indices.push(i);
            anomalies.push(series.observation(i)?);
        }
    }

    Ok(AnomalyReport {
        indices,
        anomalies,
        config: config.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_series(values: &[f64]) -> Series {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let timestamps = (0..values.len())
            .map(|i| base + chrono::Duration::hours(i as i64))
            .collect();
        Series::from_values(timestamps, values.to_vec()).unwrap()
    }

    #[test]
    fn spike_in_flat_series_is_flagged() {
        // 48 nearly-flat points with one extreme spike. The base series
        // carries a little jitter so the rolling std is non-zero.
        let mut values: Vec<f64> = (0..48)
            .map(|i| 100.0 + if i % 2 == 0 { 0.5 } else { -0.5 })
            .collect();
        values[30] = 500.0;
        let series = make_series(&values);

        let report = detect_anomalies(&series, &AnomalyConfig::default()).unwrap();
        assert!(report.is_anomaly(30));
        assert!(report.anomalies.iter().any(|o| o.value == 500.0));
        // No flat neighbor is flagged.
        assert!(!report.is_anomaly(29));
        assert!(!report.is_anomaly(31));
    }

    #[test]
    fn warmup_region_is_never_flagged() {
        let mut values = vec![10.0; 48];
        values[5] = 10_000.0; // inside the first window - 1 positions
        let series = make_series(&values);

        let report = detect_anomalies(&series, &AnomalyConfig::new(24, 3.0)).unwrap();
        assert!(report.indices.iter().all(|&i| i >= 23));
    }

    #[test]
    fn anomalies_preserve_timestamps() {
        let mut values: Vec<f64> = (0..30).map(|i| (i % 3) as f64).collect();
        values[20] = 99.0;
        let series = make_series(&values);

        let report = detect_anomalies(&series, &AnomalyConfig::new(10, 2.0)).unwrap();
        assert!(report.anomaly_count() >= 1);
        for (index, obs) in report.indices.iter().zip(&report.anomalies) {
            assert_eq!(obs.timestamp, series.timestamps()[*index]);
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let series = make_series(&[1.0, 2.0, 3.0]);
        assert!(detect_anomalies(&series, &AnomalyConfig::new(1, 3.0)).is_err());
        assert!(detect_anomalies(&series, &AnomalyConfig::new(24, 0.0)).is_err());
    }

    #[test]
    fn flat_series_has_no_anomalies() {
        let series = make_series(&[5.0; 48]);
        let report = detect_anomalies(&series, &AnomalyConfig::default()).unwrap();
        assert_eq!(report.anomaly_count(), 0);
    }
}
