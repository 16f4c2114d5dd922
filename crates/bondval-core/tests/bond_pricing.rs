//! Literal pricing scenarios for the public `price_bond` entry point.
//!
//! Expected values are textbook semi-annual DCF prices for a 1000 face bond.

use approx::assert_abs_diff_eq;
use bondval_core::{price_bond, BondSpec, Frequency, PricingError};

// ============================================================================
// Priced scenarios
// ============================================================================

#[test]
fn test_regular_case() {
    let price = price_bond(1000.0, 0.05, 10, 0.06, 2).unwrap();
    assert_abs_diff_eq!(price, 957.35, epsilon = 0.01);
}

#[test]
fn test_zero_coupon_bond() {
    let price = price_bond(1000.0, 0.0, 10, 0.05, 2).unwrap();
    let expected = 1000.0 / (1.0_f64 + 0.05 / 2.0).powi(10);
    assert_abs_diff_eq!(price, expected, epsilon = 0.01);
    assert_abs_diff_eq!(price, 781.20, epsilon = 0.01);
}

#[test]
fn test_at_par() {
    let price = price_bond(1000.0, 0.06, 10, 0.06, 2).unwrap();
    assert_abs_diff_eq!(price, 1000.00, epsilon = 0.01);
}

#[test]
fn test_short_term_bond() {
    let price = price_bond(1000.0, 0.04, 2, 0.05, 2).unwrap();
    assert!(price > 980.0 && price < 1000.0, "price = {price}");
}

#[test]
fn test_premium_bond_above_par() {
    let price = price_bond(1000.0, 0.08, 20, 0.05, 2).unwrap();
    assert!(price > 1000.0, "price = {price}");
}

#[test]
fn test_zero_periods_returns_face() {
    assert_eq!(price_bond(750.0, 0.05, 0, 0.06, 2).unwrap(), 750.0);
}

#[test]
fn test_demo_bond_from_years() {
    let bond = BondSpec::from_years(1000.0, 0.05, 5, 0.06, Frequency::SemiAnnual);
    assert_eq!(format!("Bond Price: {:.2}", bond.price().unwrap()), "Bond Price: 957.35");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_invalid_inputs() {
    let result = price_bond(1000.0, 0.05, 10, 0.0, 0);
    assert_eq!(result, Err(PricingError::InvalidDivisor));
}

#[test]
fn test_zero_frequency_fails_for_any_parameters() {
    let cases = [
        (1000.0, 0.05, 10, 0.06),
        (100.0, 0.0, 0, 0.0),
        (1.0e6, 0.2, 360, 0.15),
        (500.0, -0.01, 3, -0.02),
    ];
    for (face, coupon, periods, ytm) in cases {
        assert_eq!(
            price_bond(face, coupon, periods, ytm, 0),
            Err(PricingError::InvalidDivisor),
            "inputs: {face}, {coupon}, {periods}, {ytm}"
        );
    }
}
