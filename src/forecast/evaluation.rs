//! Holdout evaluation of the baseline models.
//!
//! The series is split by index position (not by calendar boundary) into a
//! training prefix and a held-out tail. Both models receive the identical
//! tail so their scores are comparable.

use crate::core::Series;
use crate::error::{AnalysisError, Result};
use crate::forecast::{Forecaster, Naive, WindowAverage};

/// Default fraction of the series used for training.
pub const DEFAULT_SPLIT_FRACTION: f64 = 0.8;

/// Forecast accuracy metrics over a held-out tail.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyMetrics {
    /// Mean absolute error.
    pub mae: f64,
    /// Root mean squared error.
    pub rmse: f64,
}

impl AccuracyMetrics {
    /// Calculate MAE and RMSE between actuals and a forecast.
    pub fn calculate(actual: &[f64], forecast: &[f64]) -> Result<Self> {
        if actual.is_empty() || forecast.is_empty() {
            return Err(AnalysisError::EmptyData);
        }
        if actual.len() != forecast.len() {
            return Err(AnalysisError::DimensionMismatch {
                expected: actual.len(),
                got: forecast.len(),
            });
        }

        let n = actual.len() as f64;
        let mae = actual
            .iter()
            .zip(forecast.iter())
            .map(|(a, f)| (a - f).abs())
            .sum::<f64>()
            / n;
        let mse = actual
            .iter()
            .zip(forecast.iter())
            .map(|(a, f)| (a - f).powi(2))
            .sum::<f64>()
            / n;

        Ok(Self {
            mae,
            rmse: mse.sqrt(),
        })
    }
}

/// One model's constant forecast and its scores.
#[derive(Debug, Clone)]
pub struct ModelEvaluation {
    /// Model display name.
    pub name: String,
    /// Forecast over the held-out tail.
    pub forecast: Vec<f64>,
    /// Scores against the held-out actuals.
    pub metrics: AccuracyMetrics,
}

/// Side-by-side evaluation of the naive and window-average baselines.
#[derive(Debug, Clone)]
pub struct BaselineEvaluation {
    /// The held-out tail both models were scored on.
    pub actual: Series,
    /// Index at which the series was split.
    pub split_index: usize,
    /// Naive model results.
    pub naive: ModelEvaluation,
    /// Window-average model results.
    pub window_average: ModelEvaluation,
}

/// Split a series at `floor(len * split_fraction)` and score both baseline
/// models on the held-out tail.
///
/// Fails with [`AnalysisError::InsufficientData`] when either side of the
/// split is empty or the training prefix is shorter than `window`.
pub fn evaluate_baselines(
    series: &Series,
    split_fraction: f64,
    window: usize,
) -> Result<BaselineEvaluation> {
    if !(0.0 < split_fraction && split_fraction < 1.0) {
        return Err(AnalysisError::InvalidParameter(format!(
            "split fraction must be in (0, 1), got {split_fraction}"
        )));
    }

    let split_index = (series.len() as f64 * split_fraction).floor() as usize;
    let (train, test) = series.split_at(split_index)?;
    if train.is_empty() || test.is_empty() {
        return Err(AnalysisError::InsufficientData {
            needed: 2,
            got: series.len(),
        });
    }

    let horizon = test.len();
    let actuals = test.values();

    let mut naive = Naive::new();
    naive.fit(&train)?;
    let naive_forecast = naive.predict(horizon)?;
    let naive_metrics = AccuracyMetrics::calculate(actuals, &naive_forecast)?;

    let mut window_average = WindowAverage::new(window);
    window_average.fit(&train)?;
    let wa_forecast = window_average.predict(horizon)?;
    let wa_metrics = AccuracyMetrics::calculate(actuals, &wa_forecast)?;

    Ok(BaselineEvaluation {
        actual: test,
        split_index,
        naive: ModelEvaluation {
            name: naive.name().to_string(),
            forecast: naive_forecast,
            metrics: naive_metrics,
        },
        window_average: ModelEvaluation {
            name: window_average.name().to_string(),
            forecast: wa_forecast,
            metrics: wa_metrics,
        },
    })
}
