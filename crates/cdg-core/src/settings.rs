//! Library settings.
//!
//! [`Settings`] groups the tunable business rules: the delivery lead time,
//! the number of suggested dates, the spreadsheet header labels and the
//! upload size limits.  Settings are plain values handed to the components
//! that need them; there is no process-wide instance.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! [delivery]
//! lead_business_days = 7
//! suggestion_count = 10
//!
//! [import]
//! unit_header = "UNIDADES"
//! quantity_header = "QTDE"
//! header_scan_rows = 5
//!
//! [uploads]
//! max_file_size = 209715200
//! max_total_size = 524288000
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::ensure;

/// Largest accepted `delivery.lead_business_days`: about a year and a half
/// of business days.
pub const MAX_LEAD_BUSINESS_DAYS: u32 = 366;

fn default_lead_business_days() -> u32 {
    7
}
fn default_suggestion_count() -> usize {
    10
}

fn default_unit_header() -> String {
    "UNIDADES".to_string()
}
fn default_quantity_header() -> String {
    "QTDE".to_string()
}
fn default_header_scan_rows() -> usize {
    5
}

fn default_max_file_size() -> u64 {
    200 * 1024 * 1024
}
fn default_max_total_size() -> u64 {
    500 * 1024 * 1024
}

/// Delivery-date rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySettings {
    /// Business days between today and the earliest acceptable delivery.
    #[serde(default = "default_lead_business_days")]
    pub lead_business_days: u32,
    /// How many dates to offer in the suggestion list.
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            lead_business_days: default_lead_business_days(),
            suggestion_count: default_suggestion_count(),
        }
    }
}

/// Spreadsheet import rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSettings {
    /// Header label of the unit-name column.
    #[serde(default = "default_unit_header")]
    pub unit_header: String,
    /// Header label of the quantity column.
    #[serde(default = "default_quantity_header")]
    pub quantity_header: String,
    /// Number of leading rows searched for the header labels.
    #[serde(default = "default_header_scan_rows")]
    pub header_scan_rows: usize,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            unit_header: default_unit_header(),
            quantity_header: default_quantity_header(),
            header_scan_rows: default_header_scan_rows(),
        }
    }
}

/// Size limits for uploaded attachments, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSettings {
    /// Largest accepted single file.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// Largest accepted batch, also applied to the base64 estimate.
    #[serde(default = "default_max_total_size")]
    pub max_total_size: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            max_total_size: default_max_total_size(),
        }
    }
}

/// All tunable settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Delivery-date rules.
    #[serde(default)]
    pub delivery: DeliverySettings,
    /// Spreadsheet import rules.
    #[serde(default)]
    pub import: ImportSettings,
    /// Upload size limits.
    #[serde(default)]
    pub uploads: UploadSettings,
}

impl Settings {
    /// Parse settings from a TOML document and validate them.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a TOML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    /// Check the invariants the components rely on.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=MAX_LEAD_BUSINESS_DAYS).contains(&self.delivery.lead_business_days),
            "delivery.lead_business_days must be in 1..={MAX_LEAD_BUSINESS_DAYS}, got {}",
            self.delivery.lead_business_days
        );
        ensure!(
            !self.import.unit_header.trim().is_empty()
                && !self.import.quantity_header.trim().is_empty(),
            "import header labels must not be blank"
        );
        ensure!(
            self.import.header_scan_rows > 0,
            "import.header_scan_rows must be positive"
        );
        ensure!(
            self.uploads.max_file_size <= self.uploads.max_total_size,
            "uploads.max_file_size ({}) exceeds uploads.max_total_size ({})",
            self.uploads.max_file_size,
            self.uploads.max_total_size
        );
        Ok(())
    }
}
