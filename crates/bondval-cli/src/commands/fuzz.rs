//! Fuzz command implementation.
//!
//! Prices randomly sampled bonds, appends one log line per call to the log
//! file, and prints a summary of the run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondval_fuzz::{FuzzConfig, FuzzFailure, FuzzReport, FuzzRunner};

use crate::cli::OutputFormat;
use crate::logging;
use crate::output::{print_header, print_output, print_single, print_success, print_warning, KeyValue};

/// Arguments for the fuzz command.
#[derive(Args, Debug)]
pub struct FuzzArgs {
    /// Number of pricing calls [default: 200]
    #[arg(short = 'n', long)]
    pub iterations: Option<usize>,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// TOML file with sampling ranges
    #[arg(short, long, env = "BONDVAL_FUZZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file receiving one line per call [default: bond_fuzzing.log]
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}

impl FuzzArgs {
    /// Loads the configuration file, if any, and applies flag overrides.
    fn resolve_config(&self) -> Result<FuzzConfig> {
        let mut config = match &self.config {
            Some(path) => FuzzConfig::from_file(path)
                .with_context(|| format!("Failed to load fuzz config {}", path.display()))?,
            None => FuzzConfig::default(),
        };

        if let Some(iterations) = self.iterations {
            config = config.with_iterations(iterations);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }

        Ok(config)
    }
}

/// One row of the failure table.
#[derive(Debug, Serialize, Tabled)]
struct FailureRow {
    #[tabled(rename = "Iteration")]
    iteration: usize,
    #[tabled(rename = "Inputs")]
    inputs: String,
    #[tabled(rename = "Error")]
    error: String,
}

impl From<&FuzzFailure> for FailureRow {
    fn from(failure: &FuzzFailure) -> Self {
        Self {
            iteration: failure.iteration,
            inputs: failure.inputs.to_string(),
            error: failure.error.to_string(),
        }
    }
}

/// Execute the fuzz command.
pub fn execute(args: FuzzArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let config = args.resolve_config()?;
    let runner = FuzzRunner::new(config)?;

    let log_file = runner.config().log_file.clone();
    logging::init_file(&log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let report = runner.run()?;

    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header("Fuzz Run Summary");
            }
            print_output(&summary_rows(&report, &log_file), format)?;

            if !report.is_clean() {
                if !quiet {
                    print_header("Failures");
                }
                print_output(&failure_rows(&report), format)?;
                print_warning(&format!("Total failures: {}", report.failure_count()));
            } else if !quiet {
                print_success("Total failures: 0");
            }
        }
        OutputFormat::Json => print_single(&report)?,
        OutputFormat::Csv => {
            if report.is_clean() {
                print_output(&summary_rows(&report, &log_file), format)?;
            } else {
                print_output(&failure_rows(&report), format)?;
            }
        }
        OutputFormat::Minimal => println!("{}", report.failure_count()),
    }

    Ok(())
}

fn summary_rows(report: &FuzzReport, log_file: &std::path::Path) -> Vec<KeyValue> {
    let price_or_dash = |p: Option<f64>| p.map_or_else(|| "-".to_string(), |p| format!("{p:.2}"));

    vec![
        KeyValue::new("Seed", report.seed.to_string()),
        KeyValue::new("Iterations", report.iterations.to_string()),
        KeyValue::new("Successes", report.successes.to_string()),
        KeyValue::new("Failures", report.failure_count().to_string()),
        KeyValue::new("Min Price", price_or_dash(report.min_price)),
        KeyValue::new("Max Price", price_or_dash(report.max_price)),
        KeyValue::new("Log File", log_file.display().to_string()),
    ]
}

fn failure_rows(report: &FuzzReport) -> Vec<FailureRow> {
    report.failures.iter().map(FailureRow::from).collect()
}
