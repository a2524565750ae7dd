//! FILENAME: persistence/src/lib.rs
//! Workbook model and XLSX serialization.
//!
//! The workbook here is a memory-bounded staging structure, not the XLSX
//! document itself: each sheet keeps only a window of its most recent rows
//! in memory and transparently spills older rows to anonymous temporary
//! storage. Serialization replays the spilled rows and the window into
//! `rust_xlsxwriter` and releases all backing storage first, on every exit
//! path.

mod error;
mod style;
mod workbook;
mod xlsx;

pub use error::PersistenceError;
pub use style::{Style, Styles};
pub use workbook::{Cell, CellValue, Row, Sheet, Workbook};
