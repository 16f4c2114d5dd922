//! Discounted cash flow bond pricing.
//!
//! This module provides:
//! - [`price_bond`]: present value of a fixed-coupon bond
//! - [`price_bond_detailed`]: the same price split into coupon and redemption legs
//! - [`cash_flow_schedule`]: period-by-period discounted cash flows
//!
//! All three share the per-period conversion of the annual coupon rate and
//! yield, and all three reject a zero payment frequency with
//! [`PricingError::InvalidDivisor`].

mod cashflows;

pub use cashflows::{cash_flow_schedule, DiscountedCashFlow};

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};

/// Coupon payments per year assumed when the caller does not specify one.
pub const DEFAULT_FREQUENCY: u32 = 2;

/// Result of a detailed pricing calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Present value of all coupon payments.
    pub pv_coupons: f64,
    /// Present value of the redemption at maturity.
    pub pv_face: f64,
    /// Total present value (`pv_coupons + pv_face`).
    pub price: f64,
}

/// Per-period coupon amount and discount rate.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PeriodRates {
    pub(crate) coupon_payment: f64,
    pub(crate) rate: f64,
}

impl PeriodRates {
    pub(crate) fn new(
        face_value: f64,
        coupon_rate: f64,
        yield_to_maturity: f64,
        freq: u32,
    ) -> PricingResult<Self> {
        if freq == 0 {
            return Err(PricingError::InvalidDivisor);
        }
        let freq = f64::from(freq);

        Ok(Self {
            coupon_payment: (coupon_rate * face_value) / freq,
            rate: yield_to_maturity / freq,
        })
    }

    /// Growth factor `(1 + rate)^t`.
    #[inline]
    pub(crate) fn compound(&self, t: u32) -> f64 {
        (1.0 + self.rate).powf(f64::from(t))
    }
}

/// Prices a fixed-coupon bond by discounting its cash flows.
///
/// # Arguments
///
/// * `face_value` - Par/redemption value
/// * `coupon_rate` - Annual coupon rate as a fraction (0.05 for 5%)
/// * `periods` - Total number of coupon payments
/// * `yield_to_maturity` - Annual discount rate as a fraction
/// * `freq` - Coupon payments per year (see [`DEFAULT_FREQUENCY`])
///
/// The coupon leg is summed term by term, `t = 1..=periods`. With
/// `periods == 0` the price is exactly `face_value`.
///
/// # Errors
///
/// Returns [`PricingError::InvalidDivisor`] when `freq` is zero.
///
/// # Example
///
/// ```rust
/// use bondval_core::price_bond;
///
/// let price = price_bond(1000.0, 0.05, 10, 0.06, 2).unwrap();
/// assert!((price - 957.35).abs() < 0.01);
/// ```
pub fn price_bond(
    face_value: f64,
    coupon_rate: f64,
    periods: u32,
    yield_to_maturity: f64,
    freq: u32,
) -> PricingResult<f64> {
    price_bond_detailed(face_value, coupon_rate, periods, yield_to_maturity, freq)
        .map(|breakdown| breakdown.price)
}

/// Prices a fixed-coupon bond, keeping the coupon and redemption legs apart.
///
/// `price` is bit-identical to [`price_bond`] for the same inputs.
///
/// # Errors
///
/// Returns [`PricingError::InvalidDivisor`] when `freq` is zero.
pub fn price_bond_detailed(
    face_value: f64,
    coupon_rate: f64,
    periods: u32,
    yield_to_maturity: f64,
    freq: u32,
) -> PricingResult<PriceBreakdown> {
    let rates = PeriodRates::new(face_value, coupon_rate, yield_to_maturity, freq)?;

    let mut pv_coupons = 0.0;
    for t in 1..=periods {
        pv_coupons += rates.coupon_payment / rates.compound(t);
    }

    let pv_face = face_value / rates.compound(periods);

    Ok(PriceBreakdown {
        pv_coupons,
        pv_face,
        price: pv_coupons + pv_face,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_period_rates_semi_annual() {
        let rates = PeriodRates::new(1000.0, 0.05, 0.06, 2).unwrap();
        assert_relative_eq!(rates.coupon_payment, 25.0);
        assert_relative_eq!(rates.rate, 0.03);
        assert_relative_eq!(rates.compound(0), 1.0);
        assert_relative_eq!(rates.compound(2), 1.0609, epsilon = 1e-12);
    }

    #[test]
    fn test_period_rates_rejects_zero_frequency() {
        let err = PeriodRates::new(1000.0, 0.05, 0.06, 0).unwrap_err();
        assert_eq!(err, PricingError::InvalidDivisor);
    }

    #[test]
    fn test_breakdown_legs_sum_to_price() {
        let b = price_bond_detailed(1000.0, 0.05, 10, 0.06, 2).unwrap();
        assert_eq!(b.price, b.pv_coupons + b.pv_face);
        assert_eq!(b.price, price_bond(1000.0, 0.05, 10, 0.06, 2).unwrap());

        // 25 * annuity factor at 3% over 10 periods
        assert_relative_eq!(b.pv_coupons, 213.2550, epsilon = 1e-3);
        assert_relative_eq!(b.pv_face, 744.0939, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_periods_is_face_value() {
        let b = price_bond_detailed(1234.5, 0.07, 0, 0.03, 4).unwrap();
        assert_eq!(b.pv_coupons, 0.0);
        assert_eq!(b.pv_face, 1234.5);
        assert_eq!(b.price, 1234.5);
    }

    #[test]
    fn test_zero_frequency_rejected_even_with_zero_periods() {
        assert_eq!(
            price_bond(1000.0, 0.05, 0, 0.06, 0),
            Err(PricingError::InvalidDivisor)
        );
    }

    #[test]
    fn test_zero_yield_is_undiscounted_sum() {
        // Out of the usual domain but still a plain number.
        let price = price_bond(1000.0, 0.05, 10, 0.0, 2).unwrap();
        assert_relative_eq!(price, 1250.0, epsilon = 1e-9);
    }

    #[test]
    fn test_annual_versus_semi_annual() {
        let annual = price_bond(1000.0, 0.05, 5, 0.06, 1).unwrap();
        let semi = price_bond(1000.0, 0.05, 10, 0.06, 2).unwrap();
        // Same five-year discount bond.
        assert!((annual - 957.88).abs() < 0.01);
        assert!(semi < annual);
    }
}
