//! FILENAME: persistence/src/style.rs
//! PURPOSE: The per-conversion style registry.
//! CONTEXT: Cells store a small `Style` tag instead of a full format, and
//! the registry resolves tags to shared, immutable `rust_xlsxwriter`
//! formats at serialization time. The registry is built once per conversion
//! and never mutated afterwards.

use rust_xlsxwriter::Format;
use serde::{Deserialize, Serialize};

/// Explicit fixed-point format for decimal observations. One forced decimal
/// place, up to eleven more, and never scientific notation.
const DECIMAL_NUM_FORMAT: &str = "0.0###########";

/// Style tag carried on every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Style {
    #[default]
    Default,
    /// Bold text: dataset title, header rows, section labels.
    Bold,
    /// Whole-number observation, default numeric rendering.
    Integer,
    /// Decimal observation, fixed-point rendering.
    Decimal,
}

/// The shared format set for one conversion.
#[derive(Debug)]
pub struct Styles {
    default: Format,
    bold: Format,
    integer: Format,
    decimal: Format,
}

impl Styles {
    pub fn new() -> Self {
        Styles {
            default: Format::new(),
            bold: Format::new().set_bold(),
            integer: Format::new().set_num_format("General"),
            decimal: Format::new().set_num_format(DECIMAL_NUM_FORMAT),
        }
    }

    pub fn format(&self, style: Style) -> &Format {
        match style {
            Style::Default => &self.default,
            Style::Bold => &self.bold,
            Style::Integer => &self.integer,
            Style::Decimal => &self.decimal,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Styles::new()
    }
}
