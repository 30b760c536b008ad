//! Error types for the renewable-analytics library.

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while loading, cleaning, or analyzing data.
///
/// Row-level parse failures are not represented here: the normalizer
/// recovers from them locally by dropping the offending row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// A required column could not be found after alias mapping.
    #[error("missing required column: {column}")]
    SchemaError { column: String },

    /// The CSV stream itself is malformed (not a row-level cell issue).
    #[error("csv error: {0}")]
    Csv(String),

    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Index out of bounds.
    #[error("index out of bounds: {index} (size: {size})")]
    IndexOutOfBounds { index: usize, size: usize },

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = AnalysisError::FileNotFound {
            path: "data/production.csv".to_string(),
        };
        assert_eq!(err.to_string(), "file not found: data/production.csv");

        let err = AnalysisError::SchemaError {
            column: "datetime".to_string(),
        };
        assert_eq!(err.to_string(), "missing required column: datetime");

        let err = AnalysisError::InsufficientData { needed: 24, got: 5 };
        assert_eq!(err.to_string(), "insufficient data: need at least 24, got 5");

        let err = AnalysisError::InvalidParameter("window must be positive".to_string());
        assert_eq!(err.to_string(), "invalid parameter: window must be positive");
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = AnalysisError::EmptyData;
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
