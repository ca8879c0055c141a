//! Decimal currency helpers.
//!
//! Amounts carry two-place decimal precision end to end. This crate uses
//! `rust_decimal::Decimal` rather than a binary float so that ledger math
//! stays exact and two-decimal rounding only ever happens at well-defined
//! write points, never silently inside an intermediate calculation.

use rust_decimal::Decimal;

/// The granularity every ledger-written amount is rounded to.
pub const LEDGER_SCALE: u32 = 2;

/// Tolerance used for "did this round to zero" / "is this effectively equal"
/// checks. `Decimal` arithmetic is exact, so this only absorbs the gap
/// between an unrounded intermediate value and its two-decimal ledger form.
pub const EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 3); // 0.001

/// Round to two decimal places, banker's rounding (matches `Decimal`'s
/// default `round_dp` strategy, `MidpointAwayFromZero` is not used here).
pub fn round(amount: Decimal) -> Decimal {
    amount.round_dp(LEDGER_SCALE)
}

/// True if `amount` rounds to zero at two-decimal precision.
pub fn rounds_to_zero(amount: Decimal) -> bool {
    round(amount).is_zero()
}

/// True if `a` and `b` are equal within `EPSILON`.
pub fn approx_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= EPSILON
}

/// True if `amount` is positive beyond tolerance (i.e. not "effectively
/// zero or negative").
pub fn is_positive(amount: Decimal) -> bool {
    amount > EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round_rounds_to_two_places() {
        assert_eq!(round(dec!(1.005)), dec!(1.00));
        assert_eq!(round(dec!(1.015)), dec!(1.02));
        assert_eq!(round(dec!(100)), dec!(100.00));
    }

    #[test]
    fn rounds_to_zero_detects_tiny_residuals() {
        assert!(rounds_to_zero(dec!(0.001)));
        assert!(rounds_to_zero(dec!(-0.004)));
        assert!(!rounds_to_zero(dec!(0.01)));
    }

    #[test]
    fn approx_eq_respects_epsilon() {
        assert!(approx_eq(dec!(100.00), dec!(100.0009)));
        assert!(!approx_eq(dec!(100.00), dec!(100.01)));
    }

    #[test]
    fn is_positive_ignores_rounding_noise() {
        assert!(!is_positive(dec!(0.0001)));
        assert!(is_positive(dec!(0.01)));
        assert!(!is_positive(dec!(-5)));
    }
}
