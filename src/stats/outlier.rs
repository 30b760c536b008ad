//! Global IQR-based outlier bounds and reporting.

use crate::core::{Observation, Series};
use crate::error::{AnalysisError, Result};
use crate::stats::summary::quantile;

/// Outlier bounds derived from the interquartile range of a whole series.
#[derive(Debug, Clone, PartialEq)]
pub struct IqrBounds {
    /// 25th percentile.
    pub q1: f64,
    /// 75th percentile.
    pub q3: f64,
    /// `q3 - q1`.
    pub iqr: f64,
    /// `q1 - 1.5 * iqr`.
    pub lower: f64,
    /// `q3 + 1.5 * iqr`.
    pub upper: f64,
}

impl IqrBounds {
    /// Compute bounds over all finite values.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let q1 = quantile(values, 0.25);
        let q3 = quantile(values, 0.75);
        if q1.is_nan() || q3.is_nan() {
            return Err(AnalysisError::EmptyData);
        }
        let iqr = q3 - q1;
        Ok(Self {
            q1,
            q3,
            iqr,
            lower: q1 - 1.5 * iqr,
            upper: q3 + 1.5 * iqr,
        })
    }

    /// Whether a value lies strictly outside `[lower, upper]`.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Result of a global IQR outlier pass over a series.
#[derive(Debug, Clone)]
pub struct OutlierReport {
    /// Bounds the pass was evaluated against.
    pub bounds: IqrBounds,
    /// Positions of the outliers in the input series.
    pub indices: Vec<usize>,
    /// The flagged observations, in timestamp order.
    pub outliers: Vec<Observation>,
    /// Number of observations examined.
    pub total: usize,
}

impl OutlierReport {
    pub fn outlier_count(&self) -> usize {
        self.indices.len()
    }

    pub fn outlier_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.indices.len() as f64 / self.total as f64
        }
    }
}

/// Flag every observation outside the IQR bounds of the whole series.
///
/// This is a global pass, independent of the rolling anomaly detector in
/// [`crate::detect`].
pub fn detect_outliers(series: &Series) -> Result<OutlierReport> {
    let bounds = IqrBounds::from_values(series.values())?;

    let mut indices = Vec::new();
    let mut outliers = Vec::new();
    for (i, value) in series.values().iter().enumerate() {
        if bounds.is_outlier(*value) {
            indices.push(i);
            outliers.push(series.observation(i)?);
        }
    }

    Ok(OutlierReport {
        bounds,
        indices,
        outliers,
        total: series.len(),
    })
}
