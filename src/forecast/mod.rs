//! Baseline forecasting models and holdout evaluation.

mod evaluation;
mod naive;
mod traits;
mod window_average;

pub use evaluation::{
    evaluate_baselines, AccuracyMetrics, BaselineEvaluation, ModelEvaluation,
    DEFAULT_SPLIT_FRACTION,
};
pub use naive::Naive;
pub use traits::Forecaster;
pub use window_average::{WindowAverage, DEFAULT_WINDOW};
