//! Core data structures for production series analysis.

mod series;

pub use series::{Observation, Series, SeriesBuilder, UNKNOWN_SOURCE};
