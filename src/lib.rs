//! # renewable-analytics
//!
//! Analysis toolkit for hourly renewable-energy production data.
//!
//! Loads raw tabular exports into an in-memory table, normalizes them into
//! a clean [`core::Series`], and runs descriptive statistics, baseline
//! forecasts (naive and trailing window average, scored with MAE/RMSE),
//! IQR outlier bounds, and rolling-window anomaly detection over it.
//! Rendering (plots, CSV reports, console output) is left to consumers of
//! the computed [`pipeline::AnalysisReport`].

pub mod core;
pub mod detect;
pub mod error;
pub mod forecast;
pub mod ingest;
pub mod pipeline;
pub mod stats;

pub use error::{AnalysisError, Result};

pub mod prelude {
    pub use crate::core::{Observation, Series, SeriesBuilder};
    pub use crate::detect::{detect_anomalies, AnomalyConfig};
    pub use crate::error::{AnalysisError, Result};
    pub use crate::forecast::{evaluate_baselines, AccuracyMetrics, Forecaster};
    pub use crate::ingest::{normalize, RawTable};
    pub use crate::pipeline::{run_analysis, AnalysisConfig, AnalysisReport};
    pub use crate::stats::detect_outliers;
}
