//! Workbook decoding.
//!
//! Turning spreadsheet bytes into rows is delegated to `calamine`; the
//! [`SheetDecoder`] trait keeps the extractor independent of it.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Reader};
use thiserror::Error;

use crate::cells::{CellValue, Row};

/// Failure to turn a byte buffer into rows.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The buffer is empty.
    #[error("empty file")]
    Empty,

    /// The workbook has no worksheet.
    #[error("workbook has no worksheets")]
    NoWorksheet,

    /// The spreadsheet library rejected the file.
    #[error("spreadsheet decoding failed: {0}")]
    Spreadsheet(#[from] calamine::Error),
}

/// Decodes the first worksheet of a spreadsheet file into rows.
pub trait SheetDecoder {
    /// Decode `bytes` into rows of cells.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Row>, DecodeError>;
}

/// [`SheetDecoder`] backed by `calamine` (xlsx, xlsm, xlsb, xls, ods).
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineDecoder;

impl SheetDecoder for CalamineDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Row>, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(DecodeError::NoWorksheet)??;
        let rows = range
            .rows()
            .map(|cells| {
                let mut row: Row = cells.iter().map(CellValue::from).collect();
                while row.last().is_some_and(CellValue::is_empty) {
                    row.pop();
                }
                row
            })
            .collect::<Vec<_>>();
        log::debug!("decoded worksheet with {} rows", rows.len());
        Ok(rows)
    }
}

impl<F> SheetDecoder for F
where
    F: Fn(&[u8]) -> Result<Vec<Row>, DecodeError>,
{
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Row>, DecodeError> {
        self(bytes)
    }
}

const SPREADSHEET_MIME_TYPES: [&str; 2] = [
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// Return `true` if an upload looks like an Excel file, by MIME type or by
/// `.xls` / `.xlsx` extension (browsers do not always report the type).
pub fn is_spreadsheet_file(name: &str, mime_type: &str) -> bool {
    if SPREADSHEET_MIME_TYPES.contains(&mime_type) {
        return true;
    }
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| ext == "xls" || ext == "xlsx")
}
