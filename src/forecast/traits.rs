//! Forecaster trait defining the common interface for baseline models.

use crate::core::Series;
use crate::error::Result;

/// Common interface for baseline forecasting models.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Fit the model to the series.
    fn fit(&mut self, series: &Series) -> Result<()>;

    /// Generate predictions for the specified horizon.
    fn predict(&self, horizon: usize) -> Result<Vec<f64>>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool;
}
