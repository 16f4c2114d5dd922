//! Fuzz driver error types.

use thiserror::Error;

/// Fuzz driver result type.
pub type FuzzResult<T> = Result<T, FuzzError>;

/// Errors raised while configuring the fuzz driver.
///
/// Pricing failures are not errors here; they are recorded in the
/// [`FuzzReport`](crate::FuzzReport).
#[derive(Debug, Error)]
pub enum FuzzError {
    /// Reading the configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`FuzzConfig`](crate::FuzzConfig).
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] toml::de::Error),

    /// A sampling range is empty or not finite.
    #[error("Invalid range for {field}: {reason}")]
    InvalidRange {
        /// The configuration field.
        field: String,
        /// Why the range is unusable.
        reason: String,
    },

    /// No payment frequencies to sample from.
    #[error("No payment frequencies configured")]
    NoFrequencies,
}

impl FuzzError {
    /// Creates an invalid range error.
    #[must_use]
    pub fn invalid_range(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
