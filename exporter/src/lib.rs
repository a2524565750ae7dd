//! FILENAME: exporter/src/lib.rs
//! The V4-to-workbook conversion pipeline.
//!
//! This crate composes the workspace into the one public operation the
//! surrounding system calls:
//!
//!   V4 Stream + Metadata --> parse --> order --> format --> Workbook
//!
//! - `dataset`: renders the pivoted data grid onto the "Dataset" sheet
//! - `metadata`: renders the descriptive record onto the "Metadata" sheet
//! - `convert`: the entry point tying parser, pivot, and persistence together
//!
//! The caller owns serialization (`Workbook::save_to_buffer`), storage, and
//! any retry policy; the conversion itself is a pure function of its inputs.

mod convert;
mod dataset;
mod error;
mod metadata;

// Register the separate tests module
#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use convert::{convert, Conversion, ConversionReport, ConvertOptions};
pub use dataset::DATASET_SHEET_NAME;
pub use error::ExportError;
pub use metadata::METADATA_SHEET_NAME;
