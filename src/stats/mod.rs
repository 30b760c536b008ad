//! Descriptive statistics over cleaned production series.
//!
//! Grouped aggregates, trailing rolling windows, and global IQR outlier
//! bounds. The IQR pass and the rolling anomaly detector in
//! [`crate::detect`] are deliberately independent data-quality lenses.

mod grouped;
mod outlier;
mod summary;
mod window;

pub use grouped::{
    day_type_means, hour_weekday_matrix, hourly_means, monthly_means, source_means,
    source_totals, DayType, HourWeekdayMatrix,
};
pub use outlier::{detect_outliers, IqrBounds, OutlierReport};
pub use summary::{mean, quantile, std_dev, variance};
pub use window::{rolling_mean, rolling_std, rolling_var};
