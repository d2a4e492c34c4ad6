//! # cdg
//!
//! Order-intake core of the CDG production console: business-day delivery
//! dates under the Brazilian national calendar, and the spreadsheet and
//! attachment checks run on an order form.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on it rather than on the individual
//! `cdg-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! cdg = "0.1"
//! ```
//!
//! ```rust
//! use cdg::time::{minimum_delivery_date, validate_delivery_date, Date, DeliveryRejection};
//!
//! let today = Date::from_ymd(2025, 12, 29).unwrap();
//! let earliest = minimum_delivery_date(today).unwrap();
//! assert_eq!(earliest.to_string(), "2026-01-08");
//!
//! let saturday = Date::from_ymd(2026, 1, 10).unwrap();
//! assert_eq!(
//!     validate_delivery_date(Some(saturday), today),
//!     Err(DeliveryRejection::Weekend)
//! );
//! ```
//!
//! ```rust
//! use cdg::intake::{row, QuantityImporter, UnitCatalog};
//!
//! let rows = vec![
//!     row!["Escola", "Obs"],
//!     row!["UNIDADES", "QTDE"],
//!     row!["cabo frio", 25],
//! ];
//! let catalog: UnitCatalog = ["CABO_FRIO"].into_iter().collect();
//! let data = QuantityImporter::default().process_rows(&rows, &catalog).unwrap();
//! assert_eq!(data.get("CABO_FRIO"), Some(25));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, settings, and small utilities.
pub use cdg_core as core;

/// Dates, calendars, holidays, and the delivery-date rules.
pub use cdg_time as time;

/// Spreadsheet quantity import and upload validation.
pub use cdg_intake as intake;
