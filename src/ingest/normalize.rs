//! Column canonicalization and row cleaning.
//!
//! Turns a [`RawTable`] with arbitrary headers and string cells into a
//! clean, ascending-time-sorted [`Series`]. Cleaning is a pure transform:
//! unparseable or negative rows are dropped, never patched, so running the
//! normalizer over already-clean data is a no-op.

use crate::core::{Observation, Series, UNKNOWN_SOURCE};
use crate::error::{AnalysisError, Result};
use crate::ingest::RawTable;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::{debug, info};

/// Enumerated alias table mapping known input headers (after lowercasing
/// and trimming) to canonical column names.
pub const COLUMN_ALIASES: &[(&str, &str)] = &[
    ("date", "datetime"),
    ("date_time", "datetime"),
    ("datetime", "datetime"),
    ("timestamp", "datetime"),
    ("energy_mwh", "production_mw"),
    ("production_mw", "production_mw"),
    ("value", "production_mw"),
    ("mw", "production_mw"),
    ("fuel_type", "energy_source"),
    ("energy_source", "energy_source"),
];

/// Canonicalize a single header: lowercase, trim, spaces to underscores,
/// then alias lookup. Unknown headers pass through cleaned but unmapped.
pub fn canonical_header(raw: &str) -> String {
    let cleaned = raw.trim().to_lowercase().replace(' ', "_");
    for (alias, canonical) in COLUMN_ALIASES {
        if cleaned == *alias {
            return (*canonical).to_string();
        }
    }
    cleaned
}

/// Resolved positions of the canonical columns in a raw table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// Index of the `datetime` column.
    pub datetime: usize,
    /// Index of the `production_mw` (or `energy_mwh`) column.
    pub value: usize,
    /// Index of the `energy_source` column, if present.
    pub source: Option<usize>,
}

impl ColumnMap {
    /// Resolve canonical columns from raw headers.
    ///
    /// Fails with [`AnalysisError::SchemaError`] when a required column is
    /// still missing after alias mapping.
    pub fn resolve(columns: &[String]) -> Result<Self> {
        let canonical: Vec<String> = columns.iter().map(|c| canonical_header(c)).collect();

        let find = |name: &str| canonical.iter().position(|c| c == name);

        let datetime = find("datetime").ok_or_else(|| AnalysisError::SchemaError {
            column: "datetime".to_string(),
        })?;
        let value = find("production_mw").ok_or_else(|| AnalysisError::SchemaError {
            column: "production_mw".to_string(),
        })?;

        Ok(Self {
            datetime,
            value,
            source: find("energy_source"),
        })
    }
}

/// Clean a raw table into an ascending-time-sorted series.
///
/// Rows with an unparseable timestamp, an unparseable or non-finite value,
/// or a negative value are dropped. When the table has no category column,
/// every observation's source defaults to [`UNKNOWN_SOURCE`].
pub fn normalize(table: &RawTable) -> Result<Series> {
    let map = ColumnMap::resolve(table.columns())?;

    let mut observations = Vec::with_capacity(table.len());
    let mut dropped = 0usize;

    for row in table.rows() {
        let timestamp = parse_timestamp(&row[map.datetime]);
        let value = parse_value(&row[map.value]);

        match (timestamp, value) {
            (Some(timestamp), Some(value)) if value >= 0.0 => {
                let source = match map.source {
                    Some(idx) if !row[idx].trim().is_empty() => row[idx].trim().to_string(),
                    _ => UNKNOWN_SOURCE.to_string(),
                };
                observations.push(Observation {
                    timestamp,
                    value,
                    source,
                });
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, kept = observations.len(), "dropped unclean rows");
    }
    info!(rows = observations.len(), "normalized raw table");

    Series::from_observations(observations)
}

/// Parse a timestamp cell, coercing failures to `None`.
///
/// Accepts RFC 3339 as well as the plain layouts the source exports use.
fn parse_timestamp(cell: &str) -> Option<DateTime<Utc>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(cell) {
        return Some(dt.with_timezone(&Utc));
    }

    const LAYOUTS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%d/%m/%Y %H:%M",
    ];
    for layout in LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(cell, layout) {
            return Some(naive.and_utc());
        }
    }

    // Date-only cells land on midnight.
    if let Ok(date) = NaiveDate::parse_from_str(cell, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    None
}

/// Parse a numeric cell, coercing failures and non-finite values to `None`.
fn parse_value(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
