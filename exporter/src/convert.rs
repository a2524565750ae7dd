//! FILENAME: exporter/src/convert.rs
//! PURPOSE: The top-level conversion entry point.
//! CONTEXT: One call performs one full parse pass over the input stream,
//! then one full formatting pass into a fresh workbook. Nothing is shared
//! across calls; concurrent conversions are safe as long as they do not
//! share a stream or workbook instance.

use std::io::Read;

use model::Metadata;
use persistence::Workbook;
use pivot::DimensionOrder;
use tracing::debug;

use crate::dataset::write_dataset_sheet;
use crate::error::ExportError;
use crate::metadata::write_metadata_sheet;

/// Knobs for one conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// How many most-recent rows each sheet keeps directly in memory;
    /// earlier rows spill to temporary backing storage.
    pub window_rows: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions { window_rows: 100 }
    }
}

/// What a successful conversion hands back to the caller.
#[derive(Debug)]
pub struct Conversion {
    pub workbook: Workbook,
    pub report: ConversionReport,
}

/// Counters surfaced alongside the workbook, so tolerated per-cell
/// imprecision is observable rather than silent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Distinct non-time dimension combinations (data rows produced).
    pub groups: usize,
    /// Distinct time labels (data columns produced).
    pub time_labels: usize,
    /// Observation cells left blank because their text failed numeric
    /// parsing.
    pub blanked_observations: usize,
    /// Time labels that failed the chosen calendar pattern and were ordered
    /// as the current date.
    pub label_fallbacks: usize,
}

/// Convert a V4 input stream plus its metadata record into a two-sheet
/// workbook: "Dataset" (the pivot grid) and "Metadata" (the descriptive
/// record).
///
/// The dimension display order is taken from the metadata's dimension
/// catalog where its names match the file's header names; unmatched columns
/// keep header order.
pub fn convert<R: Read>(
    input: R,
    metadata: &Metadata,
    options: &ConvertOptions,
) -> Result<Conversion, ExportError> {
    let parsed = parser::parse_v4(input)?;

    let catalog: Vec<String> = metadata
        .dimensions
        .iter()
        .filter_map(|d| d.display_name().map(str::to_string))
        .collect();
    let order = DimensionOrder::from_catalog(&parsed.dimension_names, &catalog);
    let groups = pivot::sort_groups(&parsed.groups, &order);
    let labels = pivot::order_labels(&parsed.time_labels);

    let mut workbook = Workbook::new(options.window_rows);
    let blanked = write_dataset_sheet(&mut workbook, metadata, &parsed, &groups, &labels.labels)?;
    write_metadata_sheet(&mut workbook, metadata)?;

    let report = ConversionReport {
        groups: groups.len(),
        time_labels: labels.labels.len(),
        blanked_observations: blanked,
        label_fallbacks: labels.fallbacks,
    };
    debug!(
        groups = report.groups,
        time_labels = report.time_labels,
        blanked = report.blanked_observations,
        "assembled workbook"
    );

    Ok(Conversion { workbook, report })
}
