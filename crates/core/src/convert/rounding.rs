//! Conversion arithmetic.
//!
//! CRITICAL: Rounding strategy for converted amounts:
//! - Always round to two fractional digits (the display scale of the
//!   output text form)
//! - Use banker's rounding (round half to even)

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Fractional digits in every conversion result.
pub const RESULT_SCALE: u32 = 2;

/// Applies `rate` to `amount` and rounds to the result scale.
///
/// Uses banker's rounding (round half to even) to minimize cumulative
/// errors across large batches.
///
/// # Example
///
/// ```
/// use cambio_core::convert::convert_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(convert_amount(dec!(562.5), dec!(0.9165)), dec!(515.54));
/// ```
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal) -> Decimal {
    (amount * rate).round_dp_with_strategy(RESULT_SCALE, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_convert_amount() {
        // 5000 JPY * 0.00943 = 47.15 USD
        assert_eq!(convert_amount(dec!(5000), dec!(0.00943)), dec!(47.15));
    }

    #[test]
    fn test_convert_with_rounding() {
        // 562.5 * 0.9165 = 515.54025 -> 515.54
        assert_eq!(convert_amount(dec!(562.5), dec!(0.9165)), dec!(515.54));
        // 62.5 * 0.04412 = 2.7575 -> 2.76
        assert_eq!(convert_amount(dec!(62.5), dec!(0.04412)), dec!(2.76));
    }

    #[test]
    fn test_bankers_rounding() {
        // Half-cent boundaries distinguish banker's rounding from half-up:
        // 2.765 rounds to 2.76, 2.775 rounds to 2.78.
        assert_eq!(convert_amount(dec!(1), dec!(2.765)), dec!(2.76));
        assert_eq!(convert_amount(dec!(1), dec!(2.775)), dec!(2.78));
    }

    #[test]
    fn test_exact_amounts_pass_through() {
        assert_eq!(convert_amount(dec!(100), dec!(1.5)), dec!(150.00));
    }
}
