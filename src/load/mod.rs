use std::{fs, path::Path};

use thiserror::Error;
use tracing::debug;

/// Header row every USGS geomagnetism export starts with, once the
/// fixed-width padding is collapsed to single spaces.
pub const EXPECTED_HEADER: &str =
    "Year Mon Day Hr DOY from start Fractional DOY Fractional year Dst HER KAK HON SJG sigma";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("input file contains no lines")]
    Empty,

    #[error("first line is not the USGS geomagnetism header (got `{found}`)")]
    HeaderMismatch { found: String },
}

/// One record of the file, split into its whitespace-delimited fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRow {
    /// 1-based line number in the source file, kept for error messages.
    pub line: usize,
    pub fields: Vec<String>,
}

/// Read `path`, check the header row, and return the remaining lines as
/// [`DataRow`]s in file order.
///
/// Runs of whitespace collapse into one separator, so the variable-width
/// column padding in the source format never produces empty fields. Blank
/// lines are dropped. Any failure is a [`LoadError`]; nothing is written.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<DataRow>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_text(&text)
}

fn parse_text(text: &str) -> Result<Vec<DataRow>, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, raw)| (idx + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or(LoadError::Empty)?;
    if !header
        .split_whitespace()
        .eq(EXPECTED_HEADER.split_whitespace())
    {
        return Err(LoadError::HeaderMismatch {
            found: header.to_string(),
        });
    }

    let rows: Vec<DataRow> = lines
        .map(|(line, raw)| DataRow {
            line,
            fields: raw.split_whitespace().map(str::to_string).collect(),
        })
        .collect();

    debug!(rows = rows.len(), "header verified, data rows parsed");
    Ok(rows)
}
