//! Spreadsheet cells and rows as the extractor sees them.

use std::borrow::Cow;

/// One decoded cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Blank cell.
    #[default]
    Empty,
    /// Text cell.
    Text(String),
    /// Numeric cell (integers, floats, and spreadsheet date serials).
    Number(f64),
    /// Boolean cell.
    Bool(bool),
}

/// A row of cells indexed by column position.
pub type Row = Vec<CellValue>;

impl CellValue {
    /// The cell rendered as text: numbers without a trailing `.0`,
    /// booleans as `true` / `false`, blanks as the empty string.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Empty => Cow::Borrowed(""),
            CellValue::Text(s) => Cow::Borrowed(s),
            CellValue::Number(n) => Cow::Owned(n.to_string()),
            CellValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        }
    }

    /// The numeric value, for numeric cells only.  Text that looks like a
    /// number is not converted.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Return `true` for a blank cell.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<&calamine::Data> for CellValue {
    fn from(data: &calamine::Data) -> Self {
        use calamine::Data;
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(e.to_string()),
        }
    }
}

/// Build a [`Row`] from a list of values.
///
/// ```
/// use cdg_intake::row;
/// use cdg_intake::cells::CellValue;
///
/// let r = row!["ARARUAMA", 10];
/// assert_eq!(r[1], CellValue::Number(10.0));
/// ```
#[macro_export]
macro_rules! row {
    () => { ::std::vec::Vec::<$crate::cells::CellValue>::new() };
    ($($cell:expr),+ $(,)?) => {
        vec![$($crate::cells::CellValue::from($cell)),+]
    };
}
