//! FILENAME: parser/src/v4.rs
//! PURPOSE: Streaming parse of the V4 flat file format.
//! CONTEXT: A V4 file is a delimited, quote-aware flat file where each data
//! row holds one observation value, an optional run of data-marking payload
//! columns, one time-dimension code/label pair, and N other dimension
//! code/label pairs:
//!
//!   V4_<k>, <k markings>, <time code>, <time label>, (<code>, <label>)...
//!
//! The first header cell carries the marker `V4_<k>`, where k is the number
//! of payload columns between the observation and the time pair. That fixes
//! the offset used to slice every subsequent row; the header's width then
//! fixes the dimension pair count for the whole file.

use std::collections::{HashMap, HashSet};
use std::io::Read;

use model::{DimensionKind, DimensionValue, Group, GroupKey, Observation};
use tracing::debug;

use crate::error::ParseError;

// ============================================================================
// PARSE OUTPUT
// ============================================================================

/// Everything one forward pass over a V4 stream produces.
#[derive(Debug)]
pub struct ParseOutput {
    /// Display names of the non-time dimensions, in header order.
    /// Taken from the header row's label cells (the "header group").
    pub dimension_names: Vec<String>,

    /// Display name of the time dimension, from the header row.
    pub time_name: String,

    /// One group per distinct non-time dimension combination,
    /// in first-encounter order.
    pub groups: Vec<Group>,

    /// The global time-label vocabulary, deduplicated,
    /// in first-encounter order.
    pub time_labels: Vec<String>,
}

// ============================================================================
// HEADER LAYOUT
// ============================================================================

/// Column layout fixed by the header row. Cannot change mid-file.
#[derive(Debug, Clone, Copy)]
struct Layout {
    /// Index of the time-code column (= 1 + payload column count).
    offset: usize,
    /// Total cell count every row must have.
    width: usize,
    /// Number of non-time dimension pairs.
    dimensions: usize,
}

impl Layout {
    fn from_header(header: &csv::StringRecord) -> Result<Layout, ParseError> {
        let marker = header.get(0).unwrap_or("");
        let payload = marker_count(marker)?;
        let offset = payload + 1;
        let width = header.len();

        // Minimum: observation, payload run, time pair, one dimension pair.
        if width < offset + 4 {
            return Err(ParseError::HeaderTooShort(width));
        }
        let remainder = width - offset - 2;
        if remainder % 2 != 0 {
            return Err(ParseError::UnpairedDimensionColumns(width));
        }

        Ok(Layout {
            offset,
            width,
            dimensions: remainder / 2,
        })
    }

    /// The time code column sits at `offset`; only the label column after
    /// it is read, since group identity excludes the time dimension.
    fn time_label(&self) -> usize {
        self.offset + 1
    }

    /// (code, label) column indices for dimension pair `i`.
    fn pair(&self, i: usize) -> (usize, usize) {
        let code = self.offset + 2 + i * 2;
        (code, code + 1)
    }
}

/// Extract k from a `V4_<k>` marker cell. Tolerates a UTF-8 BOM and
/// surrounding whitespace; anything else is a parse error.
fn marker_count(cell: &str) -> Result<usize, ParseError> {
    let cleaned = cell.trim_start_matches('\u{feff}').trim();
    cleaned
        .strip_prefix("V4_")
        .and_then(|suffix| suffix.parse::<usize>().ok())
        .ok_or_else(|| ParseError::BadHeaderMarker(cleaned.to_string()))
}

// ============================================================================
// PARSER
// ============================================================================

/// Parse a V4 stream into its group set and time-label vocabulary.
///
/// One strict forward pass: each data row either creates a new group or
/// merges into the existing group with the same non-time dimension values.
/// A repeated (group, time label) pair overwrites the earlier observation.
pub fn parse_v4<R: Read>(input: R) -> Result<ParseOutput, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(ParseError::EmptyFile),
    };
    let layout = Layout::from_header(&header)?;

    // The header row doubles as the "header group": its label cells name the
    // dimension columns and decide each dimension's kind.
    let mut dimension_names = Vec::with_capacity(layout.dimensions);
    let mut kinds = Vec::with_capacity(layout.dimensions);
    for i in 0..layout.dimensions {
        let (_, label) = layout.pair(i);
        let name = header.get(label).unwrap_or("").to_string();
        kinds.push(DimensionKind::from_name(&name));
        dimension_names.push(name);
    }
    let time_name = header.get(layout.time_label()).unwrap_or("").to_string();

    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut time_labels: Vec<String> = Vec::new();
    let mut seen_labels: HashSet<String> = HashSet::new();
    let mut rows: u64 = 0;

    for record in records {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.len() != layout.width {
            return Err(ParseError::BadRow {
                line,
                expected: layout.width,
                found: record.len(),
            });
        }
        rows += 1;

        let markings = (1..layout.offset)
            .map(|i| record.get(i).unwrap_or("").to_string())
            .collect();
        let observation = Observation::new(record.get(0).unwrap_or(""), markings);

        let time_label = record.get(layout.time_label()).unwrap_or("").to_string();
        if seen_labels.insert(time_label.clone()) {
            time_labels.push(time_label.clone());
        }

        let mut values = Vec::with_capacity(layout.dimensions);
        for i in 0..layout.dimensions {
            let (code, label) = layout.pair(i);
            let label = record.get(label).unwrap_or("");
            values.push(DimensionValue::new(
                kinds[i],
                record.get(code).unwrap_or(""),
                if label.is_empty() {
                    None
                } else {
                    Some(label.to_string())
                },
            ));
        }
        let key = GroupKey::new(values);

        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = groups.len();
                groups.push(Group::new(key.clone()));
                index.insert(key, slot);
                slot
            }
        };
        groups[slot].insert(time_label, observation);
    }

    if groups.len() < 2 {
        return Err(ParseError::TooFewGroups(groups.len()));
    }

    debug!(
        rows,
        groups = groups.len(),
        time_labels = time_labels.len(),
        dimensions = layout.dimensions,
        "parsed V4 stream"
    );

    Ok(ParseOutput {
        dimension_names,
        time_name,
        groups,
        time_labels,
    })
}
