//! Fuzz run results.

use serde::Serialize;

use bondval_core::{BondSpec, PricingError};

/// One pricing call that returned an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzFailure {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// The inputs that failed.
    pub inputs: BondSpec,
    /// The error kind returned by the pricer.
    pub error: PricingError,
}

/// Outcome of a fuzz run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzReport {
    /// Seed that reproduces this run.
    pub seed: u64,
    /// Number of pricing calls made.
    pub iterations: usize,
    /// Calls that returned a price.
    pub successes: usize,
    /// Calls that returned an error.
    pub failures: Vec<FuzzFailure>,
    /// Lowest price returned.
    pub min_price: Option<f64>,
    /// Highest price returned.
    pub max_price: Option<f64>,
}

impl FuzzReport {
    /// Creates an empty report for a run seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            iterations: 0,
            successes: 0,
            failures: Vec::new(),
            min_price: None,
            max_price: None,
        }
    }

    /// Records a successful call.
    pub fn record_success(&mut self, price: f64) {
        self.iterations += 1;
        self.successes += 1;
        self.min_price = Some(self.min_price.map_or(price, |m| m.min(price)));
        self.max_price = Some(self.max_price.map_or(price, |m| m.max(price)));
    }

    /// Records a failed call.
    pub fn record_failure(&mut self, failure: FuzzFailure) {
        self.iterations += 1;
        self.failures.push(failure);
    }

    /// Number of failed calls.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// True when no call failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
