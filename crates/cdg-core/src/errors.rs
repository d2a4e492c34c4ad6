//! Error types for the cdg crates.
//!
//! A single `thiserror`-derived enum covers the programmer-facing failures
//! (bad dates, bad configuration, violated preconditions).  Expected,
//! user-facing outcomes such as a rejected delivery date or a spreadsheet
//! without the required columns have their own enums in the crates that
//! produce them.

use thiserror::Error;

/// The top-level error type used throughout the cdg crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out of range, malformed).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout the cdg crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cdg_core::{ensure, errors::Error};
/// fn positive(x: u32) -> cdg_core::errors::Result<u32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
