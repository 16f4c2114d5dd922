//! Bond parameter bundle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PricingResult;
use crate::pricing::{
    cash_flow_schedule, price_bond, price_bond_detailed, DiscountedCashFlow, PriceBreakdown,
    DEFAULT_FREQUENCY,
};
use crate::types::Frequency;

/// The five inputs of a discounted cash flow bond price.
///
/// `periods` counts coupon dates independently of `freq`; use
/// [`BondSpec::from_years`] for the usual `years * freq` convention.
///
/// # Example
///
/// ```rust
/// use bondval_core::BondSpec;
///
/// let bond = BondSpec::new(1000.0, 0.05, 10, 0.06);
/// assert_eq!(bond.freq, 2);
/// assert!((bond.price().unwrap() - 957.35).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondSpec {
    /// Par/redemption value.
    pub face_value: f64,
    /// Annual coupon rate as a fraction.
    pub coupon_rate: f64,
    /// Total number of coupon payments.
    pub periods: u32,
    /// Annual discount rate as a fraction.
    pub yield_to_maturity: f64,
    /// Coupon payments per year.
    pub freq: u32,
}

impl BondSpec {
    /// Creates a spec paying [`DEFAULT_FREQUENCY`] coupons per year.
    #[must_use]
    pub fn new(face_value: f64, coupon_rate: f64, periods: u32, yield_to_maturity: f64) -> Self {
        Self {
            face_value,
            coupon_rate,
            periods,
            yield_to_maturity,
            freq: DEFAULT_FREQUENCY,
        }
    }

    /// Creates a spec for a bond with `years` to maturity and `frequency`
    /// payments per year, so `periods = years * frequency`.
    #[must_use]
    pub fn from_years(
        face_value: f64,
        coupon_rate: f64,
        years: u32,
        yield_to_maturity: f64,
        frequency: Frequency,
    ) -> Self {
        let freq = frequency.periods_per_year();
        Self {
            face_value,
            coupon_rate,
            periods: years.saturating_mul(freq),
            yield_to_maturity,
            freq,
        }
    }

    /// Replaces the payment count per year. `periods` is left untouched.
    #[must_use]
    pub fn with_freq(mut self, freq: u32) -> Self {
        self.freq = freq;
        self
    }

    /// Returns the named schedule for `freq`, if it is a standard one.
    #[must_use]
    pub fn frequency(&self) -> Option<Frequency> {
        Frequency::from_periods_per_year(self.freq)
    }

    /// Prices the bond. See [`price_bond`].
    pub fn price(&self) -> PricingResult<f64> {
        price_bond(
            self.face_value,
            self.coupon_rate,
            self.periods,
            self.yield_to_maturity,
            self.freq,
        )
    }

    /// Prices the bond with separate coupon and redemption legs.
    pub fn price_detailed(&self) -> PricingResult<PriceBreakdown> {
        price_bond_detailed(
            self.face_value,
            self.coupon_rate,
            self.periods,
            self.yield_to_maturity,
            self.freq,
        )
    }

    /// Builds the discounted cash flow schedule.
    pub fn cash_flows(&self) -> PricingResult<Vec<DiscountedCashFlow>> {
        cash_flow_schedule(
            self.face_value,
            self.coupon_rate,
            self.periods,
            self.yield_to_maturity,
            self.freq,
        )
    }
}

impl fmt::Display for BondSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(face={}, coupon={}, periods={}, ytm={}, freq={})",
            self.face_value, self.coupon_rate, self.periods, self.yield_to_maturity, self.freq
        )
    }
}
