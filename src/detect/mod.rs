//! Rolling-window anomaly detection.

mod anomaly;

pub use anomaly::{detect_anomalies, AnomalyConfig, AnomalyReport};
