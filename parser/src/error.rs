//! FILENAME: parser/src/error.rs

use thiserror::Error;

/// Structural failures while reading a V4 file.
///
/// Any of these aborts the conversion; no partial output is produced.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("input contains no header row")]
    EmptyFile,

    #[error("malformed V4 header marker: '{0}' (expected 'V4_<n>')")]
    BadHeaderMarker(String),

    #[error("header row has {0} cells, too few for a V4 layout")]
    HeaderTooShort(usize),

    #[error("header row has {0} cells, leaving an unpaired dimension column")]
    UnpairedDimensionColumns(usize),

    #[error("line {line}: expected {expected} cells, found {found}")]
    BadRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("only {0} distinct dimension combination(s); at least two are required")]
    TooFewGroups(usize),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
