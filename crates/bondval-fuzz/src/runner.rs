//! Sequential fuzz loop.

use tracing::{info, warn};

use crate::config::FuzzConfig;
use crate::error::FuzzResult;
use crate::report::{FuzzFailure, FuzzReport};
use crate::sampler::InputSampler;

/// Repeatedly prices random bonds and classifies each call by its result.
///
/// Every call emits one `tracing` event: `INFO` for a price, `WARN` for a
/// pricing error. The run ends with an `INFO` line carrying the failure
/// total. Routing those events to a file is up to the subscriber installed
/// by the caller.
#[derive(Debug, Clone)]
pub struct FuzzRunner {
    config: FuzzConfig,
}

impl FuzzRunner {
    /// Creates a runner after validating `config`.
    pub fn new(config: FuzzConfig) -> FuzzResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration this runner was built with.
    pub fn config(&self) -> &FuzzConfig {
        &self.config
    }

    /// Runs the configured number of iterations with a fresh sampler.
    pub fn run(&self) -> FuzzResult<FuzzReport> {
        let mut sampler = InputSampler::new(&self.config)?;
        Ok(self.run_with(&mut sampler))
    }

    /// Runs the configured number of iterations drawing from `sampler`.
    pub fn run_with(&self, sampler: &mut InputSampler) -> FuzzReport {
        let mut report = FuzzReport::new(sampler.seed());
        info!(
            seed = sampler.seed(),
            iterations = self.config.iterations,
            "Starting bond pricing fuzz run"
        );

        for iteration in 0..self.config.iterations {
            let inputs = sampler.sample();

            match inputs.price() {
                Ok(price) => {
                    info!("Success: {} -> {}", inputs, price);
                    report.record_success(price);
                }
                Err(error) => {
                    warn!("Failed Input: {} | {}", inputs, error);
                    report.record_failure(FuzzFailure {
                        iteration,
                        inputs,
                        error,
                    });
                }
            }
        }

        info!("Total failures: {}", report.failure_count());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Bounds;
    use crate::error::FuzzError;
    use bondval_core::PricingError;

    #[test]
    fn test_default_ranges_never_fail() {
        let runner = FuzzRunner::new(FuzzConfig::default().with_seed(7)).unwrap();
        let report = runner.run().unwrap();

        assert_eq!(report.seed, 7);
        assert_eq!(report.iterations, 200);
        assert_eq!(report.successes, 200);
        assert!(report.is_clean());
        assert!(report.min_price.unwrap() > 0.0);
    }

    #[test]
    fn test_zero_frequency_recorded_as_failure() {
        let config = FuzzConfig::default()
            .with_seed(11)
            .with_iterations(20)
            .with_frequencies(vec![0]);
        let report = FuzzRunner::new(config).unwrap().run().unwrap();

        assert_eq!(report.successes, 0);
        assert_eq!(report.failure_count(), 20);
        assert!(report
            .failures
            .iter()
            .all(|f| f.error == PricingError::InvalidDivisor && f.inputs.freq == 0));
        assert_eq!(report.failures[3].iteration, 3);
        assert_eq!(report.min_price, None);
    }

    #[test]
    fn test_mixed_frequencies_split_results() {
        let config = FuzzConfig::default()
            .with_seed(2024)
            .with_iterations(300)
            .with_frequencies(vec![0, 2]);
        let report = FuzzRunner::new(config).unwrap().run().unwrap();

        assert_eq!(report.successes + report.failure_count(), 300);
        assert!(report.successes > 0);
        assert!(report.failure_count() > 0);
    }

    #[test]
    fn test_same_seed_same_report() {
        let config = FuzzConfig::default().with_seed(99).with_iterations(50);
        let runner = FuzzRunner::new(config).unwrap();
        assert_eq!(runner.run().unwrap(), runner.run().unwrap());
    }

    #[test]
    fn test_zero_iterations() {
        let runner = FuzzRunner::new(FuzzConfig::default().with_iterations(0)).unwrap();
        let report = runner.run().unwrap();
        assert_eq!(report.iterations, 0);
        assert!(report.is_clean());
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(FuzzRunner::new(FuzzConfig::default().with_frequencies(Vec::new())).is_err());
    }

    #[test]
    fn test_rejects_unsampleable_span() {
        let mut config = FuzzConfig::default().with_seed(1).with_iterations(1);
        config.face_value = Bounds::new(-1.7e308, 1.7e308);
        assert!(matches!(
            FuzzRunner::new(config),
            Err(FuzzError::InvalidRange { .. })
        ));
    }
}
