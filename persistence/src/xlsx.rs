//! FILENAME: persistence/src/xlsx.rs
//! Final serialization of a staged workbook into XLSX bytes.

use rust_xlsxwriter::{Workbook as XlsxWorkbook, Worksheet};

use crate::error::PersistenceError;
use crate::style::Styles;
use crate::workbook::{CellValue, Row, Workbook};

pub(crate) fn save_to_buffer(workbook: Workbook) -> Result<Vec<u8>, PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let Workbook { sheets, styles, .. } = workbook;

    for sheet in sheets {
        let worksheet = xlsx.add_worksheet();
        worksheet.set_name(&sheet.name)?;
        for (col, width) in &sheet.column_widths {
            worksheet.set_column_width(*col, *width)?;
        }
        // Draining the sheet releases its window and spill storage; only
        // after every sheet is drained does the workbook serialize.
        sheet.for_each_row(|row_index, row| write_row(worksheet, &styles, row_index, row))?;
    }

    Ok(xlsx.save_to_buffer()?)
}

fn write_row(
    worksheet: &mut Worksheet,
    styles: &Styles,
    row: u32,
    cells: Row,
) -> Result<(), PersistenceError> {
    for (col, cell) in cells.into_iter().enumerate() {
        let col = col as u16;
        match cell.value {
            CellValue::Empty => {}
            CellValue::Number(number) => {
                worksheet.write_number_with_format(row, col, number, styles.format(cell.style))?;
            }
            CellValue::Text(text) => {
                worksheet.write_string_with_format(row, col, &text, styles.format(cell.style))?;
            }
            CellValue::Link(url) => {
                // Visible text defaults to the URL itself.
                worksheet.write_url(row, col, url.as_str())?;
            }
        }
    }
    Ok(())
}
