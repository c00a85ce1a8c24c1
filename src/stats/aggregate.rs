use thiserror::Error;
use tracing::debug;

use super::{Bucket, ColumnLayout, SENTINEL};
use crate::load::DataRow;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("line {line}: row has {found} fields, need at least {expected}")]
    RowTooShort {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: `{token}` in the {column} column is not a number")]
    FieldParse {
        line: usize,
        column: &'static str,
        token: String,
    },
}

/// Accumulated statistics for one index column.
///
/// `min`/`max` stay `None` until the first non-sentinel value arrives, so a
/// column with no usable measurements reports "no data" instead of a bogus
/// extremum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnStats {
    buckets: [u64; Bucket::COUNT],
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub valid: u64,
    pub invalid: u64,
}

impl ColumnStats {
    /// Fold one measurement into the running stats. Sentinel values count as
    /// invalid and touch nothing else.
    fn record(&mut self, value: f64) {
        if value == SENTINEL {
            self.invalid += 1;
            return;
        }
        self.buckets[Bucket::classify(value) as usize] += 1;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
        self.valid += 1;
    }

    pub fn bucket_count(&self, bucket: Bucket) -> u64 {
        self.buckets[bucket as usize]
    }
}

/// Statistics for the three summarized columns of one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexSummary {
    pub dst: ColumnStats,
    pub hon: ColumnStats,
    pub sjg: ColumnStats,
}

impl IndexSummary {
    /// Columns in report order, with their display names.
    pub fn columns(&self) -> [(&'static str, &ColumnStats); 3] {
        [("Dst", &self.dst), ("HON", &self.hon), ("SJG", &self.sjg)]
    }
}

/// Run the classification pass over `rows` and return the per-column stats.
///
/// A missing or non-numeric field in any designated column aborts the whole
/// run; only the sentinel marks missing data without being an error.
pub fn aggregate(rows: &[DataRow], layout: ColumnLayout) -> Result<IndexSummary, StatsError> {
    let mut summary = IndexSummary::default();

    for row in rows {
        summary.dst.record(field(row, layout.dst, "Dst")?);
        summary.hon.record(field(row, layout.hon, "HON")?);
        summary.sjg.record(field(row, layout.sjg, "SJG")?);
    }

    for (name, stats) in summary.columns() {
        debug!(
            column = name,
            valid = stats.valid,
            invalid = stats.invalid,
            "column aggregated"
        );
    }
    Ok(summary)
}

fn field(row: &DataRow, pos: usize, column: &'static str) -> Result<f64, StatsError> {
    let token = row.fields.get(pos).ok_or(StatsError::RowTooShort {
        line: row.line,
        expected: pos + 1,
        found: row.fields.len(),
    })?;
    token.parse().map_err(|_| StatsError::FieldParse {
        line: row.line,
        column,
        token: token.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: usize, dst: &str, hon: &str, sjg: &str) -> DataRow {
        let text = format!(
            "2015 3 17 0 76 18336 76.042 {} -15.3 -12.1 {} {} 2.5",
            dst, hon, sjg
        );
        DataRow {
            line,
            fields: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    #[test]
    fn superstorm_row_lands_in_the_superstorm_bucket() {
        let rows = vec![row(2, "-300.0", "0.0", "0.0")];
        let summary = aggregate(&rows, ColumnLayout::default()).unwrap();

        assert_eq!(summary.dst.bucket_count(Bucket::Superstorm), 1);
        assert_eq!(summary.dst.min, Some(-300.0));
        assert_eq!(summary.dst.max, Some(-300.0));
        assert_eq!(summary.dst.valid, 1);
    }

    #[test]
    fn inclusive_upper_boundary_goes_to_above_38() {
        let rows = vec![row(2, "0.0", "0.0", "39.0")];
        let summary = aggregate(&rows, ColumnLayout::default()).unwrap();
        assert_eq!(summary.sjg.bucket_count(Bucket::Above38), 1);
    }

    #[test]
    fn sentinel_counts_as_invalid_and_nothing_else() {
        let rows = vec![row(2, "-20.0", "99999.0", "5.0")];
        let summary = aggregate(&rows, ColumnLayout::default()).unwrap();

        assert_eq!(summary.hon.invalid, 1);
        assert_eq!(summary.hon.valid, 0);
        assert_eq!(summary.hon.min, None);
        assert_eq!(summary.hon.max, None);
        for bucket in Bucket::ALL {
            assert_eq!(summary.hon.bucket_count(bucket), 0);
        }

        // The other columns are untouched by the sentinel next door.
        assert_eq!(summary.dst.valid, 1);
        assert_eq!(summary.sjg.valid, 1);
    }

    #[test]
    fn bucket_counts_sum_to_valid_and_totals_cover_every_row() {
        let rows = vec![
            row(2, "-300.0", "99999.0", "12.0"),
            row(3, "-120.5", "3.0", "99999.0"),
            row(4, "-75.0", "-35.0", "35.5"),
            row(5, "99999.0", "-10.0", "50.0"),
            row(6, "8.0", "20.0", "-1.5"),
        ];
        let summary = aggregate(&rows, ColumnLayout::default()).unwrap();

        for (name, stats) in summary.columns() {
            let bucket_total: u64 = Bucket::ALL.iter().map(|b| stats.bucket_count(*b)).sum();
            assert_eq!(bucket_total, stats.valid, "column {}", name);
            assert_eq!(stats.valid + stats.invalid, rows.len() as u64, "column {}", name);
        }

        assert_eq!(summary.dst.min, Some(-300.0));
        assert_eq!(summary.dst.max, Some(8.0));
        assert_eq!(summary.sjg.max, Some(50.0));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let rows = vec![
            row(2, "-42.0", "99999.0", "0.0"),
            row(3, "15.0", "-260.0", "38.9"),
        ];
        let first = aggregate(&rows, ColumnLayout::default()).unwrap();
        let second = aggregate(&rows, ColumnLayout::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn no_rows_means_no_data_anywhere() {
        let summary = aggregate(&[], ColumnLayout::default()).unwrap();
        for (_, stats) in summary.columns() {
            assert_eq!(stats.valid, 0);
            assert_eq!(stats.min, None);
            assert_eq!(stats.max, None);
        }
    }

    #[test]
    fn non_numeric_field_is_fatal() {
        let rows = vec![row(2, "n/a", "0.0", "0.0")];
        match aggregate(&rows, ColumnLayout::default()) {
            Err(StatsError::FieldParse {
                line,
                column,
                token,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(column, "Dst");
                assert_eq!(token, "n/a");
            }
            other => panic!("expected FieldParse, got {:?}", other),
        }
    }

    #[test]
    fn short_row_is_fatal() {
        let rows = vec![DataRow {
            line: 4,
            fields: vec!["2015".into(), "3".into(), "17".into()],
        }];
        match aggregate(&rows, ColumnLayout::default()) {
            Err(StatsError::RowTooShort {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 4);
                assert_eq!(expected, 8);
                assert_eq!(found, 3);
            }
            other => panic!("expected RowTooShort, got {:?}", other),
        }
    }
}
