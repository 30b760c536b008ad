//! In-memory table of raw string cells keyed by column name.

use crate::error::{AnalysisError, Result};
use std::path::Path;
use tracing::debug;

/// A raw table as loaded from a tabular source.
///
/// Cells are kept as untyped strings; all interpretation happens in the
/// normalizer. Column names are stored exactly as they appear in the input.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row; its length must match the column count.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(AnalysisError::DimensionMismatch {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Load a table from a CSV file with a header row.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AnalysisError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| AnalysisError::Csv(e.to_string()))?;

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| AnalysisError::Csv(e.to_string()))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut table = RawTable::new(columns);
        for record in reader.records() {
            let record = record.map_err(|e| AnalysisError::Csv(e.to_string()))?;
            table.push_row(record.iter().map(|c| c.to_string()).collect())?;
        }

        debug!(
            rows = table.len(),
            columns = table.columns.len(),
            path = %path.display(),
            "loaded csv"
        );
        Ok(table)
    }

    /// Get the column names as they appeared in the input.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
