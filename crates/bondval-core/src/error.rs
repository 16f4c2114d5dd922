//! Error types for bond pricing.

use serde::Serialize;
use thiserror::Error;

/// A specialized Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors that can occur while pricing a bond.
///
/// Out-of-range rates and zero periods are not errors; they produce a
/// numeric result. The only rejected input is a zero payment frequency.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PricingError {
    /// The payment frequency is used as a divisor and was zero.
    #[error("Invalid divisor: payment frequency must be non-zero (division by zero)")]
    InvalidDivisor,
}
