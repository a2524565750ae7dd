//! FILENAME: persistence/src/workbook.rs
//! PURPOSE: The memory-bounded workbook staging model.
//! CONTEXT: A sheet retains at most `window_rows` most-recent rows directly
//! in memory; earlier rows are spilled, one JSON-encoded row per line, to an
//! anonymous temp file. `tempfile::tempfile()` returns an already-unlinked
//! handle, so the backing storage is reclaimed by the OS on every exit path
//! (normal drain, early error, panic) without any explicit cleanup step.

use std::collections::{HashMap, VecDeque};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, SeekFrom, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PersistenceError;
use crate::style::{Style, Styles};
use crate::xlsx;

// ============================================================================
// CELLS
// ============================================================================

/// A staged cell value. `Link` renders as a navigable URL whose visible
/// text is the URL itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Link(String),
}

/// A staged cell: value plus a style tag resolved at serialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub style: Style,
}

pub type Row = Vec<Cell>;

impl Cell {
    pub fn empty() -> Self {
        Cell {
            value: CellValue::Empty,
            style: Style::Default,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Cell {
            value: CellValue::Text(text.into()),
            style: Style::Default,
        }
    }

    pub fn text_with_style(text: impl Into<String>, style: Style) -> Self {
        Cell {
            value: CellValue::Text(text.into()),
            style,
        }
    }

    pub fn number(number: f64, style: Style) -> Self {
        Cell {
            value: CellValue::Number(number),
            style,
        }
    }

    pub fn link(url: impl Into<String>) -> Self {
        Cell {
            value: CellValue::Link(url.into()),
            style: Style::Default,
        }
    }
}

// ============================================================================
// SHEET
// ============================================================================

/// One worksheet under construction.
#[derive(Debug)]
pub struct Sheet {
    pub name: String,
    /// Column widths in character units.
    pub column_widths: HashMap<u16, f64>,
    window: VecDeque<Row>,
    window_rows: usize,
    spill: Option<BufWriter<File>>,
    spilled: u64,
    appended: u64,
}

impl Sheet {
    pub fn new(name: impl Into<String>, window_rows: usize) -> Self {
        Sheet {
            name: name.into(),
            column_widths: HashMap::new(),
            window: VecDeque::new(),
            // A zero-row window would spill the row being appended; keep one.
            window_rows: window_rows.max(1),
            spill: None,
            spilled: 0,
            appended: 0,
        }
    }

    /// Append one row below the rows already staged.
    pub fn append_row(&mut self, row: Row) -> Result<(), PersistenceError> {
        self.window.push_back(row);
        self.appended += 1;
        while self.window.len() > self.window_rows {
            if let Some(oldest) = self.window.pop_front() {
                self.spill_row(&oldest)?;
            }
        }
        Ok(())
    }

    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    /// Total rows appended so far, spilled or not.
    pub fn row_count(&self) -> u64 {
        self.appended
    }

    /// Rows currently held in the in-memory window.
    pub fn rows_in_window(&self) -> usize {
        self.window.len()
    }

    fn spill_row(&mut self, row: &Row) -> Result<(), PersistenceError> {
        if self.spill.is_none() {
            debug!(sheet = %self.name, window_rows = self.window_rows, "opening spill file");
            self.spill = Some(BufWriter::new(tempfile::tempfile()?));
        }
        if let Some(writer) = self.spill.as_mut() {
            serde_json::to_writer(&mut *writer, row)?;
            writer.write_all(b"\n")?;
            self.spilled += 1;
        }
        Ok(())
    }

    /// Drain every staged row, oldest first, releasing the window and the
    /// spill storage as it goes. Consumes the sheet: after this call no row
    /// remains addressable.
    pub fn for_each_row<F>(mut self, mut f: F) -> Result<(), PersistenceError>
    where
        F: FnMut(u32, Row) -> Result<(), PersistenceError>,
    {
        let mut index: u32 = 0;

        // Spilled rows are the oldest; replay them first.
        if let Some(writer) = self.spill.take() {
            let mut file = writer.into_inner().map_err(|e| e.into_error())?;
            file.seek(SeekFrom::Start(0))?;
            for line in BufReader::new(file).lines() {
                let line = line?;
                if line.is_empty() {
                    continue;
                }
                let row: Row = serde_json::from_str(&line)?;
                f(index, row)?;
                index += 1;
            }
            // The spill handle drops here; the unlinked file is reclaimed.
        }

        for row in std::mem::take(&mut self.window) {
            f(index, row)?;
            index += 1;
        }
        Ok(())
    }
}

// ============================================================================
// WORKBOOK
// ============================================================================

/// A workbook under construction: named sheets plus the conversion's style
/// registry.
#[derive(Debug)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
    pub styles: Styles,
    window_rows: usize,
}

impl Workbook {
    /// `window_rows` bounds how many recent rows each sheet keeps directly
    /// addressable in memory.
    pub fn new(window_rows: usize) -> Self {
        Workbook {
            sheets: Vec::new(),
            styles: Styles::new(),
            window_rows,
        }
    }

    pub fn add_sheet(&mut self, name: impl Into<String>) -> &mut Sheet {
        self.sheets.push(Sheet::new(name, self.window_rows));
        let last = self.sheets.len() - 1;
        &mut self.sheets[last]
    }

    /// Finalize the workbook into XLSX bytes.
    ///
    /// Each sheet's window and spill storage is drained and released before
    /// the final serialization happens.
    pub fn save_to_buffer(self) -> Result<Vec<u8>, PersistenceError> {
        xlsx::save_to_buffer(self)
    }
}
