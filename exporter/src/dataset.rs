//! FILENAME: exporter/src/dataset.rs
//! PURPOSE: Renders the pivoted data grid onto the "Dataset" sheet.
//! CONTEXT: Rows are the sorted dimension groups, columns the ordered time
//! labels. Layout:
//!
//!   row 0: dataset title
//!   row 1: corner cell (dimension names, alphabetical, newline-joined),
//!          then one cell per time label
//!   rows : group title, then that group's observation per label

use model::Metadata;
use parser::ParseOutput;
use persistence::{Cell, PersistenceError, Style, Workbook};
use pivot::SortedGroup;
use tracing::warn;

pub const DATASET_SHEET_NAME: &str = "Dataset";

/// Extra character width a data column gets beyond its label's length.
const LABEL_COLUMN_PADDING: f64 = 5.0;

/// Write the data sheet. Returns how many observation cells were blanked
/// because their text failed numeric parsing.
pub(crate) fn write_dataset_sheet(
    workbook: &mut Workbook,
    metadata: &Metadata,
    parsed: &ParseOutput,
    groups: &[SortedGroup<'_>],
    labels: &[String],
) -> Result<usize, PersistenceError> {
    let sheet = workbook.add_sheet(DATASET_SHEET_NAME);

    // Leading metadata block: the dataset title.
    let title = metadata.title.clone().unwrap_or_default();
    sheet.append_row(vec![Cell::text_with_style(title, Style::Bold)])?;

    // Header row.
    let mut names = parsed.dimension_names.clone();
    names.sort();
    let corner = names.join("\n");
    let mut widest_title = longest_line(&corner);

    let mut header = Vec::with_capacity(labels.len() + 1);
    header.push(Cell::text_with_style(corner, Style::Bold));
    for label in labels {
        header.push(Cell::text_with_style(label.clone(), Style::Bold));
    }
    sheet.append_row(header)?;

    // One row per sorted group.
    let mut blanked = 0;
    for group in groups {
        let group_title = group.title();
        widest_title = widest_title.max(longest_line(&group_title));

        let mut row = Vec::with_capacity(labels.len() + 1);
        row.push(Cell::text(group_title));
        for label in labels {
            row.push(match group.observation(label) {
                Some(observation) => observation_cell(&observation.value, &mut blanked),
                None => Cell::empty(),
            });
        }
        sheet.append_row(row)?;
    }

    // Title column fits the longest rendered title; data columns are sized
    // from the first (representative) label plus fixed padding.
    sheet.set_column_width(0, widest_title as f64);
    if let Some(representative) = labels.first() {
        let width = representative.chars().count() as f64 + LABEL_COLUMN_PADDING;
        for col in 1..=labels.len() {
            sheet.set_column_width(col as u16, width);
        }
    }

    Ok(blanked)
}

/// Build the cell for one observation's raw text.
///
/// Empty text stays blank; text with a decimal point becomes a fixed-point
/// numeric cell; text without one becomes a default-styled numeric cell.
/// Text that fails numeric parsing is rendered blank, counted, and logged.
fn observation_cell(raw: &str, blanked: &mut usize) -> Cell {
    let text = raw.trim();
    if text.is_empty() {
        return Cell::empty();
    }
    match text.parse::<f64>() {
        Ok(number) if text.contains('.') => Cell::number(number, Style::Decimal),
        Ok(number) => Cell::number(number, Style::Integer),
        Err(_) => {
            *blanked += 1;
            warn!(value = %text, "observation is not numeric; leaving the cell blank");
            Cell::empty()
        }
    }
}

/// Width in characters of the widest line of a (possibly multi-line) title.
fn longest_line(title: &str) -> usize {
    title
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}
