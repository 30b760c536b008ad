//! Loading raw tabular data and normalizing it into a clean [`Series`].
//!
//! [`RawTable`] is the in-memory loader target: string cells keyed by
//! column name, with no interpretation applied. [`normalize`] owns the
//! cleaning contract — header canonicalization, alias mapping, datetime
//! and numeric coercion, and row dropping.
//!
//! [`Series`]: crate::core::Series

mod normalize;
mod table;

pub use normalize::{canonical_header, normalize, ColumnMap, COLUMN_ALIASES};
pub use table::RawTable;
