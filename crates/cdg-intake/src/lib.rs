//! # cdg-intake
//!
//! Order-intake helpers for the cdg forms.
//!
//! - [`quantities`]: reads a unit → quantity list out of an uploaded
//!   spreadsheet.
//! - [`uploads`]: checks PDF attachments against the size limits.
//!
//! Decoding goes through the [`SheetDecoder`] trait, implemented with
//! `calamine` by [`CalamineDecoder`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Cell and row types.
pub mod cells;

/// Workbook decoding.
pub mod decode;

/// Unit → quantity extraction.
pub mod quantities;

/// PDF attachment validation.
pub mod uploads;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use cells::{CellValue, Row};
pub use decode::{is_spreadsheet_file, CalamineDecoder, DecodeError, SheetDecoder};
pub use quantities::{
    extract_quantities, find_header_columns, locate_data_start_row, process_workbook,
    ExtractionOutcome, HeaderColumns, HeaderLabels, ImportError, ImportSummary,
    QuantityImporter, UnitCatalog, UnitQuantities,
};
pub use uploads::{
    estimate_base64_size, FileLimits, FileRejection, UploadPlan, UploadRejection,
    UploadValidator, UploadedFile,
};
