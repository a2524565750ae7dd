//! FILENAME: pivot/src/lib.rs
//! Ordering subsystem for the V4 pivot.
//!
//! This crate decides the order of everything the data sheet renders:
//! - `order`: dimension display-order remapping and group comparison
//! - `labels`: chronological vs lexical ordering of the time-label columns
//!
//! Nothing here mutates a group or reparses data; ordering is applied as a
//! view over the structures the parser produced.

pub mod labels;
pub mod order;

// Re-export commonly used types for convenience
pub use labels::{order_labels, LabelOrdering, OrderedLabels};
pub use order::{sort_groups, DimensionOrder, SortedGroup};
