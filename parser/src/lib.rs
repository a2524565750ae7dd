//! FILENAME: parser/src/lib.rs
//! PURPOSE: Library root for the V4 file parser.
//! CONTEXT: This crate turns a delimited V4 input stream into the group set
//! and time-label vocabulary the pivot is built from.
//!
//! PIPELINE: Byte Stream --> CSV Records --> Header Layout --> Groups + Labels
//!
//! The stream is read once, strictly forward, line by line. Working memory is
//! proportional to the number of distinct dimension combinations, not to the
//! number of input rows.

pub mod error;
pub mod v4;


// Re-export commonly used types for convenience
pub use error::ParseError;
pub use v4::{parse_v4, ParseOutput};
