//! FILENAME: model/src/observation.rs
//! A single time-indexed measurement from a V4 row.

use serde::{Deserialize, Serialize};

/// One measurement as read from the file.
///
/// The value is kept as the raw string: it may be empty, a plain integer,
/// a decimal, or a non-numeric marking such as "*". Interpretation is the
/// formatter's job, not the parser's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Raw observation text from the first cell of the row.
    pub value: String,
    /// Extra payload columns (data markings) carried through unchanged.
    pub markings: Vec<String>,
}

impl Observation {
    pub fn new(value: impl Into<String>, markings: Vec<String>) -> Self {
        Observation {
            value: value.into(),
            markings,
        }
    }
}
