//! FILENAME: exporter/src/error.rs

use thiserror::Error;

/// Failure of a whole conversion. When this is returned no partial workbook
/// is considered valid output.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("V4 parse error: {0}")]
    Parse(#[from] parser::ParseError),

    #[error("workbook error: {0}")]
    Persistence(#[from] persistence::PersistenceError),
}
