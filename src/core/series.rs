//! Series data structure for cleaned hourly production data.

use crate::error::{AnalysisError, Result};
use chrono::{DateTime, Utc};

/// Sentinel category used when the input carries no energy-source column.
pub const UNKNOWN_SOURCE: &str = "unknown";

/// A single cleaned measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Time of the measurement.
    pub timestamp: DateTime<Utc>,
    /// Produced energy (MWh) or power (MW), depending on the input schema.
    pub value: f64,
    /// Energy-source category, [`UNKNOWN_SOURCE`] when absent from the input.
    pub source: String,
}

/// An ordered series of observations with a nominal hourly cadence.
///
/// Timestamps are validated to be non-decreasing at construction; gaps left
/// by dropped rows are allowed and never imputed. Every pipeline stage takes
/// a `&Series` and produces new data, so a series is never mutated once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
    sources: Vec<String>,
}

/// Builder for constructing a [`Series`] observation by observation.
#[derive(Debug, Clone, Default)]
pub struct SeriesBuilder {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
    sources: Vec<String>,
}

impl SeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(n),
            values: Vec::with_capacity(n),
            sources: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, timestamp: DateTime<Utc>, value: f64, source: impl Into<String>) {
        self.timestamps.push(timestamp);
        self.values.push(value);
        self.sources.push(source.into());
    }

    pub fn build(self) -> Result<Series> {
        Series::new(self.timestamps, self.values, self.sources)
    }
}

impl Series {
    /// Create a new series, validating lengths and timestamp order.
    pub fn new(
        timestamps: Vec<DateTime<Utc>>,
        values: Vec<f64>,
        sources: Vec<String>,
    ) -> Result<Self> {
        if values.len() != timestamps.len() {
            return Err(AnalysisError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }
        if sources.len() != timestamps.len() {
            return Err(AnalysisError::DimensionMismatch {
                expected: timestamps.len(),
                got: sources.len(),
            });
        }
        for i in 1..timestamps.len() {
            if timestamps[i] < timestamps[i - 1] {
                return Err(AnalysisError::TimestampError(
                    "timestamps must be in ascending order".to_string(),
                ));
            }
        }
        Ok(Self {
            timestamps,
            values,
            sources,
        })
    }

    /// Create a series without category labels, defaulting every
    /// observation's source to [`UNKNOWN_SOURCE`].
    pub fn from_values(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        let sources = vec![UNKNOWN_SOURCE.to_string(); timestamps.len()];
        Self::new(timestamps, values, sources)
    }

    /// Build a series from owned observations, sorted stably by timestamp.
    pub fn from_observations(mut observations: Vec<Observation>) -> Result<Self> {
        observations.sort_by_key(|o| o.timestamp);
        let mut builder = SeriesBuilder::with_capacity(observations.len());
        for obs in observations {
            builder.push(obs.timestamp, obs.value, obs.source);
        }
        builder.build()
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Get timestamps.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Get values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get source labels.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Get the observation at an index.
    pub fn observation(&self, index: usize) -> Result<Observation> {
        if index >= self.len() {
            return Err(AnalysisError::IndexOutOfBounds {
                index,
                size: self.len(),
            });
        }
        Ok(Observation {
            timestamp: self.timestamps[index],
            value: self.values[index],
            source: self.sources[index].clone(),
        })
    }

    /// Iterate over observations in timestamp order.
    pub fn iter(&self) -> impl Iterator<Item = Observation> + '_ {
        (0..self.len()).map(move |i| Observation {
            timestamp: self.timestamps[i],
            value: self.values[i],
            source: self.sources[i].clone(),
        })
    }

    /// Split into a prefix of `index` observations and the remaining tail.
    pub fn split_at(&self, index: usize) -> Result<(Series, Series)> {
        if index > self.len() {
            return Err(AnalysisError::IndexOutOfBounds {
                index,
                size: self.len(),
            });
        }
        let head = Series {
            timestamps: self.timestamps[..index].to_vec(),
            values: self.values[..index].to_vec(),
            sources: self.sources[..index].to_vec(),
        };
        let tail = Series {
            timestamps: self.timestamps[index..].to_vec(),
            values: self.values[index..].to_vec(),
            sources: self.sources[index..].to_vec(),
        };
        Ok((head, tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_timestamps(n: usize) -> Vec<DateTime<Utc>> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (0..n).map(|i| base + chrono::Duration::hours(i as i64)).collect()
    }

    #[test]
    fn new_validates_lengths() {
        let result = Series::new(make_timestamps(3), vec![1.0, 2.0], vec![]);
        assert!(matches!(
            result,
            Err(AnalysisError::DimensionMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn new_rejects_descending_timestamps() {
        let mut timestamps = make_timestamps(3);
        timestamps.reverse();
        let result = Series::from_values(timestamps, vec![1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(AnalysisError::TimestampError(_))));
    }

    #[test]
    fn new_allows_duplicate_timestamps() {
        let mut timestamps = make_timestamps(3);
        timestamps[1] = timestamps[0];
        timestamps[2] = timestamps[0];
        assert!(Series::from_values(timestamps, vec![1.0, 2.0, 3.0]).is_ok());
    }

    #[test]
    fn from_observations_sorts_by_timestamp() {
        let timestamps = make_timestamps(3);
        let observations = vec![
            Observation {
                timestamp: timestamps[2],
                value: 3.0,
                source: "wind".to_string(),
            },
            Observation {
                timestamp: timestamps[0],
                value: 1.0,
                source: "solar".to_string(),
            },
            Observation {
                timestamp: timestamps[1],
                value: 2.0,
                source: "hydro".to_string(),
            },
        ];

        let series = Series::from_observations(observations).unwrap();
        assert_eq!(series.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(series.sources()[0], "solar");
    }

    #[test]
    fn split_at_partitions_without_overlap() {
        let series = Series::from_values(make_timestamps(5), vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let (head, tail) = series.split_at(3).unwrap();
        assert_eq!(head.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(tail.values(), &[4.0, 5.0]);
        assert_eq!(tail.timestamps()[0], series.timestamps()[3]);
    }

    #[test]
    fn builder_round_trips() {
        let timestamps = make_timestamps(2);
        let mut builder = SeriesBuilder::new();
        builder.push(timestamps[0], 10.0, "wind");
        builder.push(timestamps[1], 12.0, "wind");
        let series = builder.build().unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.observation(1).unwrap().value, 12.0);
    }
}
