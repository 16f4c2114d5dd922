//! Bondval CLI - Discounted cash flow bond pricing.
//!
//! # Usage
//!
//! ```bash
//! # Price the demo bond (1000 face, 5% coupon, 6% yield, 5 years, semi-annual)
//! bondval price
//!
//! # Price a custom bond and show its cash flows
//! bondval price --face 100 --coupon 4.25 --yield 3.9 --years 10 --schedule
//!
//! # Fuzz the pricer, logging every call to bond_fuzzing.log
//! bondval fuzz --iterations 500 --seed 42
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = cli.format;

    match cli.command {
        Commands::Price(args) => {
            logging::init_stderr();
            commands::price::execute(args, format, cli.quiet)?;
        }
        // The fuzz command installs its own file subscriber once the log
        // path is known.
        Commands::Fuzz(args) => commands::fuzz::execute(args, format, cli.quiet)?,
    }

    Ok(())
}
