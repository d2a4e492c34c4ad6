//! Unit → quantity extraction from an uploaded spreadsheet.
//!
//! The order forms accept a workbook listing, for each unit (school,
//! facility), how many copies it receives.  The two relevant columns can sit
//! anywhere in the first few rows, under the headers `UNIDADES` and `QTDE`
//! by default:
//!
//! | Escola   | Obs      |
//! |----------|----------|
//! | UNIDADES | QTDE     |
//! | ARARUAMA | 10       |
//! | CABO FRIO| 25       |
//!
//! Extraction runs in three steps: [`find_header_columns`],
//! [`locate_data_start_row`], [`extract_quantities`].  [`QuantityImporter`]
//! chains them behind a decoder and reports failures as values.

use std::collections::BTreeMap;

use cdg_core::settings::ImportSettings;
use serde::Serialize;
use thiserror::Error;

use crate::cells::{CellValue, Row};
use crate::decode::{CalamineDecoder, DecodeError, SheetDecoder};

// ── Header labels ─────────────────────────────────────────────────────────────

/// The two column headers the extractor looks for.
///
/// Stored normalized (trimmed, uppercase); cells are normalized the same way
/// before comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLabels {
    unit: String,
    quantity: String,
}

impl HeaderLabels {
    /// Labels for the unit-name and quantity columns.
    pub fn new(unit: &str, quantity: &str) -> Self {
        Self {
            unit: normalize_header(unit),
            quantity: normalize_header(quantity),
        }
    }

    /// Normalized unit-name label.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Normalized quantity label.
    pub fn quantity(&self) -> &str {
        &self.quantity
    }
}

impl Default for HeaderLabels {
    fn default() -> Self {
        let settings = ImportSettings::default();
        Self::new(&settings.unit_header, &settings.quantity_header)
    }
}

fn normalize_header(text: &str) -> String {
    text.trim().to_uppercase()
}

fn cell_matches(cell: Option<&CellValue>, label: &str) -> bool {
    cell.is_some_and(|c| normalize_header(&c.as_text()) == label)
}

// ── Header discovery ──────────────────────────────────────────────────────────

/// Where the header labels were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderColumns {
    /// Column of the unit names.
    pub unit: usize,
    /// Column of the quantities.
    pub quantity: usize,
    /// Row at which both columns were known.
    pub row: usize,
}

/// Find the unit and quantity columns within the first `max_scan_rows` rows.
///
/// When a label occurs more than once, the rightmost occurrence in the
/// latest scanned row wins.  Scanning stops at the first row by which both
/// labels have been seen, possibly in different rows.
pub fn find_header_columns(
    rows: &[Row],
    labels: &HeaderLabels,
    max_scan_rows: usize,
) -> Option<HeaderColumns> {
    let mut unit = None;
    let mut quantity = None;
    for (i, row) in rows.iter().take(max_scan_rows).enumerate() {
        for (j, cell) in row.iter().enumerate() {
            let text = normalize_header(&cell.as_text());
            if text == labels.unit {
                unit = Some(j);
            }
            if text == labels.quantity {
                quantity = Some(j);
            }
        }
        if let (Some(unit), Some(quantity)) = (unit, quantity) {
            log::debug!("header found at row {i}: unit column {unit}, quantity column {quantity}");
            return Some(HeaderColumns {
                unit,
                quantity,
                row: i,
            });
        }
    }
    None
}

/// Index of the first data row: the row after the first one holding both
/// labels at the given columns, or 0 when no row does.
pub fn locate_data_start_row(rows: &[Row], columns: &HeaderColumns, labels: &HeaderLabels) -> usize {
    rows.iter()
        .position(|row| {
            cell_matches(row.get(columns.unit), &labels.unit)
                && cell_matches(row.get(columns.quantity), &labels.quantity)
        })
        .map_or(0, |i| i + 1)
}

// ── Unit catalog ──────────────────────────────────────────────────────────────

/// The canonical unit names an import may refer to.
///
/// Spreadsheet cells are normalized (trimmed, uppercased, spaces turned into
/// underscores) and matched exactly or case-insensitively; the first
/// matching entry wins.  Two entries that normalize to the same text are not
/// told apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitCatalog {
    units: Vec<String>,
}

impl UnitCatalog {
    /// Catalog from canonical names, in lookup order.
    pub fn new<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            units: units.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a canonical name at the end of the lookup order.
    pub fn insert(&mut self, unit: impl Into<String>) {
        self.units.push(unit.into());
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Return `true` if the catalog has no names.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Resolve raw cell text to a canonical name.
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        let candidate = normalize_unit(raw);
        if candidate.is_empty() {
            return None;
        }
        self.units
            .iter()
            .find(|unit| **unit == candidate || unit.to_uppercase() == candidate)
            .map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for UnitCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// `" cabo frio "` → `"CABO_FRIO"`.
pub fn normalize_unit(raw: &str) -> String {
    raw.trim().to_uppercase().replace(' ', "_")
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// Canonical unit name → quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnitQuantities(BTreeMap<String, u32>);

impl UnitQuantities {
    /// Quantity recorded for `unit`.
    pub fn get(&self, unit: &str) -> Option<u32> {
        self.0.get(unit).copied()
    }

    /// Number of units with a quantity.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if no unit has a quantity.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.0.values().map(|&q| u64::from(q)).sum()
    }

    /// Totals shown next to the imported list.
    pub fn summary(&self) -> ImportSummary {
        ImportSummary {
            total_units: self.len(),
            total_quantity: self.total_quantity(),
        }
    }

    /// Iterate in unit-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Totals of an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Units with a quantity.
    pub total_units: usize,
    /// Sum of the quantities.
    pub total_quantity: u64,
}

/// A quantity cell counts only when it is a whole number greater than zero.
fn positive_quantity(cell: &CellValue) -> Option<u32> {
    let n = cell.as_number()?;
    if !n.is_finite() || n <= 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
        return None;
    }
    Some(n as u32)
}

/// Read `(unit, quantity)` pairs from `start_row` on.
///
/// Rows too short to reach both columns, unknown units, and quantities that
/// are not positive whole numbers are skipped.  A unit listed twice keeps
/// the last quantity.
pub fn extract_quantities(
    rows: &[Row],
    catalog: &UnitCatalog,
    columns: &HeaderColumns,
    start_row: usize,
) -> UnitQuantities {
    let width = columns.unit.max(columns.quantity) + 1;
    let mut out = BTreeMap::new();
    for (i, row) in rows.iter().enumerate().skip(start_row) {
        if row.len() < width {
            continue;
        }
        let raw_unit = row[columns.unit].as_text();
        let Some(unit) = catalog.resolve(&raw_unit) else {
            if !raw_unit.trim().is_empty() {
                log::debug!("row {i}: unknown unit {raw_unit:?}");
            }
            continue;
        };
        let cell = &row[columns.quantity];
        let Some(quantity) = positive_quantity(cell) else {
            match cell.as_number() {
                Some(n) if n > 0.0 && n.fract() != 0.0 => {
                    log::debug!("row {i}: fractional quantity {n} for {unit} dropped")
                }
                _ => log::debug!("row {i}: ignoring quantity {cell:?} for {unit}"),
            }
            continue;
        };
        out.insert(unit.to_string(), quantity);
    }
    UnitQuantities(out)
}

// ── Orchestration ─────────────────────────────────────────────────────────────

/// Why an import produced nothing.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The header labels were not found in the scanned rows.
    #[error("Formato inválido. A planilha deve conter as colunas \"{unit_header}\" e \"{quantity_header}\".")]
    InvalidFormat {
        /// Expected unit-name header.
        unit_header: String,
        /// Expected quantity header.
        quantity_header: String,
    },

    /// Headers were found but no row had a known unit and a positive quantity.
    #[error("Nenhuma unidade válida encontrada na planilha ou todas as quantidades são zero.")]
    NoValidEntries,

    /// The file could not be decoded.
    #[error("Erro ao processar o arquivo. Verifique se o formato está correto.")]
    Decode(#[from] DecodeError),
}

/// Result of an import in the shape the form renders: a mapping and an
/// optional error message.  On failure `data` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionOutcome {
    /// Unit → quantity.
    pub data: UnitQuantities,
    /// User-facing error, `None` on success.
    pub error: Option<String>,
    /// Totals, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ImportSummary>,
}

impl From<Result<UnitQuantities, ImportError>> for ExtractionOutcome {
    fn from(result: Result<UnitQuantities, ImportError>) -> Self {
        match result {
            Ok(data) => ExtractionOutcome {
                summary: Some(data.summary()),
                data,
                error: None,
            },
            Err(e) => ExtractionOutcome {
                data: UnitQuantities::default(),
                error: Some(e.to_string()),
                summary: None,
            },
        }
    }
}

/// Runs the full import: decode, find headers, extract.
///
/// Stateless; one importer can serve any number of imports, concurrently if
/// the decoder allows it.
#[derive(Debug, Clone)]
pub struct QuantityImporter<D: SheetDecoder = CalamineDecoder> {
    labels: HeaderLabels,
    header_scan_rows: usize,
    decoder: D,
}

impl Default for QuantityImporter<CalamineDecoder> {
    fn default() -> Self {
        Self::from_settings(&ImportSettings::default())
    }
}

impl QuantityImporter<CalamineDecoder> {
    /// Importer using `calamine` and the given settings.
    pub fn from_settings(settings: &ImportSettings) -> Self {
        Self::with_decoder(settings, CalamineDecoder)
    }
}

impl<D: SheetDecoder> QuantityImporter<D> {
    /// Importer using a custom decoder.
    pub fn with_decoder(settings: &ImportSettings, decoder: D) -> Self {
        Self {
            labels: HeaderLabels::new(&settings.unit_header, &settings.quantity_header),
            header_scan_rows: settings.header_scan_rows,
            decoder,
        }
    }

    /// The header labels in use.
    pub fn labels(&self) -> &HeaderLabels {
        &self.labels
    }

    /// Run the import over already-decoded rows.
    pub fn process_rows(
        &self,
        rows: &[Row],
        catalog: &UnitCatalog,
    ) -> Result<UnitQuantities, ImportError> {
        let columns = find_header_columns(rows, &self.labels, self.header_scan_rows).ok_or_else(
            || ImportError::InvalidFormat {
                unit_header: self.labels.unit.clone(),
                quantity_header: self.labels.quantity.clone(),
            },
        )?;
        let start = locate_data_start_row(rows, &columns, &self.labels);
        let data = extract_quantities(rows, catalog, &columns, start);
        if data.is_empty() {
            log::warn!("spreadsheet had headers but no valid unit/quantity rows");
            return Err(ImportError::NoValidEntries);
        }
        Ok(data)
    }

    /// Decode `bytes` and run the import.
    pub fn try_process(
        &self,
        bytes: &[u8],
        catalog: &UnitCatalog,
    ) -> Result<UnitQuantities, ImportError> {
        let rows = self.decoder.decode(bytes)?;
        self.process_rows(&rows, catalog)
    }

    /// Decode `bytes` and run the import, reporting failures in the
    /// returned value.  Decoding errors are logged with their cause and
    /// surface only as a generic message.
    pub fn process(&self, bytes: &[u8], catalog: &UnitCatalog) -> ExtractionOutcome {
        let result = self.try_process(bytes, catalog);
        if let Err(ImportError::Decode(cause)) = &result {
            log::error!("failed to process spreadsheet: {cause}");
        }
        result.into()
    }
}

/// Import with the default settings and the `calamine` decoder.
pub fn process_workbook(bytes: &[u8], catalog: &UnitCatalog) -> ExtractionOutcome {
    QuantityImporter::default().process(bytes, catalog)
}
