//! Trailing window-average forecasting model.
//!
//! Forecasts the mean of the last `window` training values, extrapolated
//! as a constant. The trailing average is computed once at fit time, not
//! re-evaluated per forecast step.

use crate::core::Series;
use crate::error::{AnalysisError, Result};
use crate::forecast::Forecaster;

/// Default window: one day at hourly cadence.
pub const DEFAULT_WINDOW: usize = 24;

/// Forecaster that repeats the mean of the last `window` observations.
#[derive(Debug, Clone)]
pub struct WindowAverage {
    window: usize,
    last_mean: Option<f64>,
}

impl WindowAverage {
    /// Create a window-average model with the given window size.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            last_mean: None,
        }
    }

    /// Get the window size.
    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for WindowAverage {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl Forecaster for WindowAverage {
    fn fit(&mut self, series: &Series) -> Result<()> {
        if self.window == 0 {
            return Err(AnalysisError::InvalidParameter(
                "window must be positive".to_string(),
            ));
        }

        let values = series.values();
        if values.is_empty() {
            return Err(AnalysisError::EmptyData);
        }
        // A short history must be flagged, never averaged over fewer points.
        if values.len() < self.window {
            return Err(AnalysisError::InsufficientData {
                needed: self.window,
                got: values.len(),
            });
        }

        let tail = &values[values.len() - self.window..];
        self.last_mean = Some(tail.iter().sum::<f64>() / self.window as f64);
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        let mean = self.last_mean.ok_or_else(|| {
            AnalysisError::InvalidParameter("model must be fitted before prediction".to_string())
        })?;
        Ok(vec![mean; horizon])
    }

    fn name(&self) -> &str {
        "WindowAverage"
    }

    fn is_fitted(&self) -> bool {
        self.last_mean.is_some()
    }
}
