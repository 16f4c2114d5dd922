//! CLI command implementations.

pub mod fuzz;
pub mod price;

// Re-export submodules for convenience
pub use fuzz::FuzzArgs;
pub use price::PriceArgs;

use crate::error::{CliError, CliResult};

/// Validates a face value.
pub fn validate_face_value(face: f64) -> CliResult<f64> {
    if !(face.is_finite() && face > 0.0) {
        return Err(CliError::InvalidFaceValue(face));
    }
    Ok(face)
}

/// Validates a coupon rate given as a percentage.
pub fn validate_coupon(coupon: f64) -> CliResult<f64> {
    if !(0.0..=100.0).contains(&coupon) {
        return Err(CliError::InvalidCoupon(coupon));
    }
    Ok(coupon)
}

/// Validates a yield given as a percentage.
pub fn validate_yield(yield_value: f64) -> CliResult<f64> {
    if !(-10.0..=100.0).contains(&yield_value) {
        return Err(CliError::InvalidYield(yield_value));
    }
    Ok(yield_value)
}
