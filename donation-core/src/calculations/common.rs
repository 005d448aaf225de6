//! Shared decimal helpers for donation amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 round away from zero, as currency display expects.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use donation_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2.554)), dec!(2.55));
/// assert_eq!(round_half_up(dec!(2.555)), dec!(2.56));
/// assert_eq!(round_half_up(dec!(-2.555)), dec!(-2.56));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps negative amounts to zero. Monetary fields never go below 0.
///
/// ```
/// use rust_decimal_macros::dec;
/// use donation_core::calculations::common::clamp_non_negative;
///
/// assert_eq!(clamp_non_negative(dec!(-0.01)), dec!(0));
/// assert_eq!(clamp_non_negative(dec!(12.50)), dec!(12.50));
/// ```
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}

/// Largest amount any single monetary field accepts: $999,999.99.
pub const MAXIMUM_AMOUNT: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

/// Clamps an entered amount into `0..=MAXIMUM_AMOUNT`.
///
/// Keeping every input under the ceiling keeps the tip, the allocation sum
/// and the total well inside `Decimal`'s range.
///
/// ```
/// use rust_decimal_macros::dec;
/// use donation_core::calculations::common::{MAXIMUM_AMOUNT, clamp_amount};
///
/// assert_eq!(clamp_amount(dec!(-3)), dec!(0));
/// assert_eq!(clamp_amount(dec!(1e20)), MAXIMUM_AMOUNT);
/// ```
pub fn clamp_amount(value: Decimal) -> Decimal {
    clamp_non_negative(value).min(MAXIMUM_AMOUNT)
}
