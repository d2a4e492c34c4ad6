//! Miscellaneous utilities.

/// Formatting helpers (dates, file sizes).
pub mod data_formatters;

/// Parsing helpers (date strings).
pub mod data_parsers;
