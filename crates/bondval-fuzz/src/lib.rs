//! # Bondval Fuzz
//!
//! Randomised fuzz driver for [`bondval_core::price_bond`].
//!
//! The driver samples bond inputs from configurable ranges, prices each one,
//! and sorts the calls into successes and failures by the `Result` variant
//! the pricer returns. Each call is reported through `tracing`; the binary
//! that runs the driver decides where those lines go.
//!
//! ## Example
//!
//! ```rust
//! use bondval_fuzz::{FuzzConfig, FuzzRunner};
//!
//! let config = FuzzConfig::default().with_seed(42).with_iterations(50);
//! let report = FuzzRunner::new(config).unwrap().run().unwrap();
//! assert_eq!(report.iterations, 50);
//! assert!(report.is_clean());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod config;
mod error;
mod report;
mod runner;
mod sampler;

pub use config::{Bounds, FuzzConfig};
pub use error::{FuzzError, FuzzResult};
pub use report::{FuzzFailure, FuzzReport};
pub use runner::FuzzRunner;
pub use sampler::InputSampler;
