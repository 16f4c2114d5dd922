//! Fuzz driver configuration.
//!
//! Loaded from TOML. Every field is optional; omitted fields take the
//! defaults below, which mirror the plain-vanilla domain the pricer is built
//! for.
//!
//! ```toml
//! iterations = 500
//! seed = 42
//! log_file = "bond_fuzzing.log"
//! frequencies = [1, 2, 4, 12]
//!
//! [face_value]
//! min = 100.0
//! max = 10000.0
//!
//! [periods]
//! min = 1
//! max = 60
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FuzzError, FuzzResult};

/// Inclusive sampling bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds<T> {
    /// Lower bound (inclusive)
    pub min: T,
    /// Upper bound (inclusive)
    pub max: T,
}

impl<T> Bounds<T> {
    /// Creates inclusive bounds.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

/// Fuzz driver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FuzzConfig {
    /// Number of pricing calls
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// RNG seed; a random one is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Log file receiving one line per call
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Face value range
    #[serde(default = "default_face_value")]
    pub face_value: Bounds<f64>,

    /// Annual coupon rate range (fraction)
    #[serde(default = "default_coupon_rate")]
    pub coupon_rate: Bounds<f64>,

    /// Annual yield range (fraction)
    #[serde(default = "default_yield_to_maturity")]
    pub yield_to_maturity: Bounds<f64>,

    /// Coupon period count range
    #[serde(default = "default_periods")]
    pub periods: Bounds<u32>,

    /// Payment frequencies to choose from. Zero is accepted so the
    /// invalid-divisor path can be exercised on purpose.
    #[serde(default = "default_frequencies")]
    pub frequencies: Vec<u32>,
}

fn default_iterations() -> usize {
    200
}

fn default_log_file() -> PathBuf {
    PathBuf::from("bond_fuzzing.log")
}

fn default_face_value() -> Bounds<f64> {
    Bounds::new(100.0, 10_000.0)
}

fn default_coupon_rate() -> Bounds<f64> {
    Bounds::new(0.0, 0.20)
}

fn default_yield_to_maturity() -> Bounds<f64> {
    Bounds::new(0.0001, 0.20)
}

fn default_periods() -> Bounds<u32> {
    Bounds::new(1, 60)
}

fn default_frequencies() -> Vec<u32> {
    vec![1, 2, 4, 12]
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            seed: None,
            log_file: default_log_file(),
            face_value: default_face_value(),
            coupon_rate: default_coupon_rate(),
            yield_to_maturity: default_yield_to_maturity(),
            periods: default_periods(),
            frequencies: default_frequencies(),
        }
    }
}

impl FuzzConfig {
    /// Loads and validates a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> FuzzResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> FuzzResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the number of iterations.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Sets the frequencies to sample from.
    #[must_use]
    pub fn with_frequencies(mut self, frequencies: Vec<u32>) -> Self {
        self.frequencies = frequencies;
        self
    }

    /// Checks that every range can be sampled.
    pub fn validate(&self) -> FuzzResult<()> {
        check_real("face_value", self.face_value)?;
        check_real("coupon_rate", self.coupon_rate)?;
        check_real("yield_to_maturity", self.yield_to_maturity)?;

        if self.periods.min > self.periods.max {
            return Err(FuzzError::invalid_range(
                "periods",
                format!("min {} exceeds max {}", self.periods.min, self.periods.max),
            ));
        }

        if self.frequencies.is_empty() {
            return Err(FuzzError::NoFrequencies);
        }

        Ok(())
    }
}

fn check_real(field: &str, bounds: Bounds<f64>) -> FuzzResult<()> {
    if !bounds.min.is_finite() || !bounds.max.is_finite() {
        return Err(FuzzError::invalid_range(field, "bounds must be finite"));
    }
    if bounds.min > bounds.max {
        return Err(FuzzError::invalid_range(
            field,
            format!("min {} exceeds max {}", bounds.min, bounds.max),
        ));
    }
    // Uniform sampling needs max - min representable.
    if !(bounds.max - bounds.min).is_finite() {
        return Err(FuzzError::invalid_range(field, "span must be finite"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FuzzConfig::default();
        assert_eq!(config.iterations, 200);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_file, PathBuf::from("bond_fuzzing.log"));
        assert_eq!(config.face_value, Bounds::new(100.0, 10_000.0));
        assert_eq!(config.coupon_rate, Bounds::new(0.0, 0.20));
        assert_eq!(config.yield_to_maturity, Bounds::new(0.0001, 0.20));
        assert_eq!(config.periods, Bounds::new(1, 60));
        assert_eq!(config.frequencies, vec![1, 2, 4, 12]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = FuzzConfig::from_toml_str("").unwrap();
        assert_eq!(config, FuzzConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = FuzzConfig::from_toml_str(
            r#"
            iterations = 25
            seed = 7
            frequencies = [0]

            [periods]
            min = 0
            max = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.iterations, 25);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.frequencies, vec![0]);
        assert_eq!(config.periods, Bounds::new(0, 0));
        assert_eq!(config.face_value, default_face_value());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = FuzzConfig::from_toml_str("iteratons = 5").unwrap_err();
        assert!(matches!(err, FuzzError::Deserialization(_)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = FuzzConfig::from_toml_str(
            r#"
            [coupon_rate]
            min = 0.5
            max = 0.1
            "#,
        )
        .unwrap_err();

        match err {
            FuzzError::InvalidRange { field, .. } => assert_eq!(field, "coupon_rate"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_inverted_periods_rejected() {
        let mut config = FuzzConfig::default();
        config.periods = Bounds::new(10, 1);
        assert!(matches!(
            config.validate(),
            Err(FuzzError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut config = FuzzConfig::default();
        config.face_value = Bounds::new(100.0, f64::INFINITY);
        assert!(matches!(
            config.validate(),
            Err(FuzzError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_overflowing_span_rejected() {
        let err = FuzzConfig::from_toml_str(
            r#"
            iterations = 1
            seed = 1

            [face_value]
            min = -1.7e308
            max = 1.7e308
            "#,
        )
        .unwrap_err();

        match err {
            FuzzError::InvalidRange { field, reason } => {
                assert_eq!(field, "face_value");
                assert_eq!(reason, "span must be finite");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_widest_finite_span_accepted() {
        let mut config = FuzzConfig::default();
        config.yield_to_maturity = Bounds::new(-1.0e308, 0.5e308);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_frequencies_rejected() {
        let config = FuzzConfig::default().with_frequencies(Vec::new());
        assert!(matches!(config.validate(), Err(FuzzError::NoFrequencies)));
    }

    #[test]
    fn test_builders() {
        let config = FuzzConfig::default()
            .with_iterations(3)
            .with_seed(99)
            .with_log_file("out.log");
        assert_eq!(config.iterations, 3);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.log_file, PathBuf::from("out.log"));
    }
}
