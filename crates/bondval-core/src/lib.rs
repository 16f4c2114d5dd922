//! # Bondval Core
//!
//! Present-value pricing of fixed-coupon bonds by discounted cash flow.
//!
//! This crate provides:
//!
//! - **Pricing**: [`price_bond`] and its detailed variant with separate
//!   coupon and redemption legs
//! - **Cash Flows**: period-by-period discount factors and present values
//! - **Types**: [`BondSpec`] parameter bundle and [`Frequency`] schedules
//!
//! Everything here is a pure function of its inputs: no I/O, no logging, no
//! shared state.
//!
//! ## Example
//!
//! ```rust
//! use bondval_core::prelude::*;
//!
//! // 5-year, 5% semi-annual bond at a 6% yield
//! let bond = BondSpec::from_years(1000.0, 0.05, 5, 0.06, Frequency::SemiAnnual);
//! let price = bond.price().unwrap();
//! assert!((price - 957.35).abs() < 0.01);
//!
//! // A zero payment frequency is the one rejected input
//! assert_eq!(price_bond(1000.0, 0.05, 10, 0.06, 0), Err(PricingError::InvalidDivisor));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod pricing;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PricingError, PricingResult};
    pub use crate::pricing::{
        cash_flow_schedule, price_bond, price_bond_detailed, DiscountedCashFlow, PriceBreakdown,
        DEFAULT_FREQUENCY,
    };
    pub use crate::types::{BondSpec, Frequency};
}

pub use error::{PricingError, PricingResult};
pub use pricing::{
    cash_flow_schedule, price_bond, price_bond_detailed, DiscountedCashFlow, PriceBreakdown,
    DEFAULT_FREQUENCY,
};
pub use types::{BondSpec, Frequency};
