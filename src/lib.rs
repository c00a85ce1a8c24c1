//! Summary statistics for USGS geomagnetism exports.
//!
//! One synchronous pass: load and validate the file, classify the Dst, HON
//! and SJG columns of every row into storm-intensity buckets, and hand the
//! accumulated counts to the report writer.

pub mod load;
pub mod report;
pub mod stats;

pub use load::{load_rows, DataRow, LoadError};
pub use stats::{aggregate, Bucket, ColumnLayout, ColumnStats, IndexSummary, StatsError, SENTINEL};
