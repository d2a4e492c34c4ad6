//! Concrete calendar implementations.

/// Brazil (national holidays).
pub mod brazil;
