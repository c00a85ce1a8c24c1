use std::io::{self, Write};

use crate::stats::{Bucket, ColumnStats, IndexSummary};

/// Write the summary in its fixed order: one bucket-count block per column
/// (Dst, HON, SJG), then the combined max / min / bad-count / valid-count
/// blocks across all three columns.
pub fn write_report(out: &mut impl Write, summary: &IndexSummary) -> io::Result<()> {
    for (name, stats) in summary.columns() {
        writeln!(out)?;
        for bucket in Bucket::ALL {
            writeln!(
                out,
                "{} {} count: {}",
                name,
                bucket.label(),
                stats.bucket_count(bucket)
            )?;
        }
    }

    write_block(out, summary, |name, stats| {
        format!("{} max: {}", name, extremum(stats.max))
    })?;
    write_block(out, summary, |name, stats| {
        format!("{} min: {}", name, extremum(stats.min))
    })?;
    write_block(out, summary, |name, stats| {
        format!("Bad {} value count: {}", name, stats.invalid)
    })?;
    write_block(out, summary, |name, stats| {
        format!("Total {} value count: {}", name, stats.valid)
    })?;

    Ok(())
}

fn write_block(
    out: &mut impl Write,
    summary: &IndexSummary,
    line: impl Fn(&str, &ColumnStats) -> String,
) -> io::Result<()> {
    writeln!(out)?;
    for (name, stats) in summary.columns() {
        writeln!(out, "{}", line(name, stats))?;
    }
    Ok(())
}

// A column can be all sentinels; min/max over nothing prints as "no data".
fn extremum(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "no data".to_string(),
    }
}
