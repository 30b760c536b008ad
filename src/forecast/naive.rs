//! Naive forecasting model.
//!
//! The naive method simply forecasts the last observed value for all
//! future periods.

use crate::core::Series;
use crate::error::{AnalysisError, Result};
use crate::forecast::Forecaster;

/// Naive forecaster that repeats the last value.
#[derive(Debug, Clone, Default)]
pub struct Naive {
    last_value: Option<f64>,
}

impl Naive {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Forecaster for Naive {
    fn fit(&mut self, series: &Series) -> Result<()> {
        let values = series.values();
        if values.is_empty() {
            return Err(AnalysisError::EmptyData);
        }
        self.last_value = values.last().copied();
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        let last = self.last_value.ok_or_else(|| {
            AnalysisError::InvalidParameter("model must be fitted before prediction".to_string())
        })?;
        Ok(vec![last; horizon])
    }

    fn name(&self) -> &str {
        "Naive"
    }

    fn is_fitted(&self) -> bool {
        self.last_value.is_some()
    }
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
    fn naive_repeats_last_value() {
        let series = make_series(&[1.0, 2.0, 3.0, 42.0]);
        let mut model = Naive::new();
        model.fit(&series).unwrap();

        let forecast = model.predict(5).unwrap();
        assert_eq!(forecast, vec![42.0, 42.0, 42.0, 42.0, 42.0]);
    }

    #[test]
    fn naive_zero_horizon_returns_empty() {
        let series = make_series(&[1.0, 2.0]);
        let mut model = Naive::new();
        model.fit(&series).unwrap();
        assert!(model.predict(0).unwrap().is_empty());
    }

    #[test]
    fn naive_handles_empty_data() {
        let series = make_series(&[]);
        let mut model = Naive::new();
        assert!(matches!(model.fit(&series), Err(AnalysisError::EmptyData)));
    }

    #[test]
    fn naive_requires_fit_before_predict() {
        let model = Naive::new();
        assert!(model.predict(5).is_err());
        assert!(!model.is_fitted());
    }
}
