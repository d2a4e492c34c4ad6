//! # cdg-core
//!
//! Core types and error definitions for the cdg crates.
//!
//! This crate provides the building blocks shared across the workspace:
//! the error hierarchy, the `ensure!` macro, the TOML-backed
//! [`Settings`], and small parsing and formatting utilities.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Tunable business rules loaded from TOML.
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{DeliverySettings, ImportSettings, Settings, UploadSettings};
