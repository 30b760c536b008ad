//! Fixed-sequence batch analysis over one clean series.
//!
//! This is the single entry point the presentation layer consumes: it runs
//! every descriptive pass in order and collects the results into an
//! [`AnalysisReport`]. Stages never mutate the input series.

use crate::core::Series;
use crate::detect::{detect_anomalies, AnomalyConfig, AnomalyReport};
use crate::error::{AnalysisError, Result};
use crate::forecast::{evaluate_baselines, BaselineEvaluation, DEFAULT_SPLIT_FRACTION, DEFAULT_WINDOW};
use crate::stats::{
    day_type_means, detect_outliers, hour_weekday_matrix, hourly_means, monthly_means,
    rolling_mean, rolling_std, source_means, source_totals, DayType, HourWeekdayMatrix,
    OutlierReport,
};
use tracing::{info, warn};

/// Configuration for one analysis run.
///
/// Explicit parameters instead of module-level globals, so runs are
/// reproducible and testable in isolation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Rolling-statistics window width.
    pub window_size: usize,
    /// Anomaly sensitivity: multiplier on the rolling standard deviation.
    pub threshold: f64,
    /// Fraction of the series used to train the baseline forecasters.
    pub split_fraction: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW,
            threshold: 3.0,
            split_fraction: DEFAULT_SPLIT_FRACTION,
        }
    }
}

impl AnalysisConfig {
    pub fn new(window_size: usize, threshold: f64) -> Self {
        Self {
            window_size,
            threshold,
            ..Self::default()
        }
    }
}

/// Everything one analysis run computes, ready for a presentation sink.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Mean production, weekdays versus weekend.
    pub day_type_means: Vec<(DayType, f64)>,
    /// Mean production per hour of day.
    pub hourly_means: Vec<(u32, f64)>,
    /// Mean production per calendar month.
    pub monthly_means: Vec<(u32, f64)>,
    /// Mean production per energy source.
    pub source_means: Vec<(String, f64)>,
    /// Total production per energy source, largest first.
    pub source_totals: Vec<(String, f64)>,
    /// Hour-of-day by day-of-week mean matrix.
    pub hour_weekday: HourWeekdayMatrix,
    /// Trailing rolling mean, aligned with the input series.
    pub rolling_mean: Vec<f64>,
    /// Trailing rolling standard deviation, aligned with the input series.
    pub rolling_std: Vec<f64>,
    /// Global IQR outlier report.
    pub outliers: OutlierReport,
    /// Baseline forecast evaluation; `None` when the series is too short
    /// for the configured window or split.
    pub baselines: Option<BaselineEvaluation>,
    /// Rolling-window anomaly report.
    pub anomalies: AnomalyReport,
}

/// Run the full fixed analysis sequence over a clean series.
pub fn run_analysis(series: &Series, config: &AnalysisConfig) -> Result<AnalysisReport> {
    if series.is_empty() {
        return Err(AnalysisError::EmptyData);
    }
    info!(
        observations = series.len(),
        window = config.window_size,
        threshold = config.threshold,
        "starting analysis run"
    );

    let outliers = detect_outliers(series)?;
    info!(count = outliers.outlier_count(), "iqr outlier pass done");

    // The baseline evaluation needs a full window of training data; a
    // series too short for that skips the stage rather than failing the
    // remaining, independent stages.
    let baselines = match evaluate_baselines(series, config.split_fraction, config.window_size) {
        Ok(eval) => Some(eval),
        Err(AnalysisError::InsufficientData { needed, got }) => {
            warn!(needed, got, "series too short for baseline evaluation, skipping");
            None
        }
        Err(e) => return Err(e),
    };

    let anomalies = detect_anomalies(
        series,
        &AnomalyConfig::new(config.window_size, config.threshold),
    )?;
    info!(count = anomalies.anomaly_count(), "anomaly pass done");

    Ok(AnalysisReport {
        day_type_means: day_type_means(series),
        hourly_means: hourly_means(series),
        monthly_means: monthly_means(series),
        source_means: source_means(series),
        source_totals: source_totals(series),
        hour_weekday: hour_weekday_matrix(series),
        rolling_mean: rolling_mean(series.values(), config.window_size),
        rolling_std: rolling_std(series.values(), config.window_size),
        outliers,
        baselines,
        anomalies,
    })
}
