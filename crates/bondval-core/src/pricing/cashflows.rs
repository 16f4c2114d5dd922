//! Period-by-period discounted cash flows.

use serde::{Deserialize, Serialize};

use super::PeriodRates;
use crate::error::PricingResult;

/// One discounted payment of a bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountedCashFlow {
    /// Payment number, starting at 1 (0 only for a bond with no periods left).
    pub period: u32,
    /// Undiscounted amount paid; the final period includes the redemption.
    pub amount: f64,
    /// Discount factor `1 / (1 + y/freq)^period`.
    pub discount_factor: f64,
    /// Present value of `amount`.
    pub present_value: f64,
}

/// Builds the discounted cash flow schedule of a fixed-coupon bond.
///
/// Each row carries one coupon; the last row adds the face value. A bond with
/// `periods == 0` yields a single row at period 0 paying the face value
/// undiscounted, so the present values always sum to the bond price.
///
/// # Errors
///
/// Returns [`PricingError::InvalidDivisor`](crate::PricingError::InvalidDivisor)
/// when `freq` is zero.
pub fn cash_flow_schedule(
    face_value: f64,
    coupon_rate: f64,
    periods: u32,
    yield_to_maturity: f64,
    freq: u32,
) -> PricingResult<Vec<DiscountedCashFlow>> {
    let rates = PeriodRates::new(face_value, coupon_rate, yield_to_maturity, freq)?;

    if periods == 0 {
        return Ok(vec![DiscountedCashFlow {
            period: 0,
            amount: face_value,
            discount_factor: 1.0,
            present_value: face_value,
        }]);
    }

    let flows = (1..=periods)
        .map(|t| {
            let growth = rates.compound(t);
            let amount = if t == periods {
                rates.coupon_payment + face_value
            } else {
                rates.coupon_payment
            };
            DiscountedCashFlow {
                period: t,
                amount,
                discount_factor: 1.0 / growth,
                present_value: amount / growth,
            }
        })
        .collect();

    Ok(flows)
}
