//! FILENAME: model/src/lib.rs
//! Shared value types for the V4-to-spreadsheet converter.
//!
//! This crate holds the types every other crate in the workspace speaks in:
//! - `dimension`: a labeled dimension value and its kind
//! - `observation`: a single time-indexed measurement
//! - `group`: a unique dimension combination and its observations
//! - `metadata`: the externally supplied dataset description record
//!
//! None of these types perform I/O; they are plain data with value semantics.

pub mod dimension;
pub mod group;
pub mod metadata;
pub mod observation;

// Re-export commonly used types for convenience
pub use dimension::{DimensionKind, DimensionValue};
pub use group::{Group, GroupKey};
pub use metadata::{
    Alert, Change, CodeList, Contact, Download, Metadata, Reference, UsageNote,
};
pub use observation::Observation;
