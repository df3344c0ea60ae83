//! Common utility functions for salary calculations.
//!
//! Shared rounding and bounding helpers used by the income conversion and
//! contribution calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use parafiscal_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use parafiscal_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns true if `value` is a rate in `[0, 1]`.
pub fn is_fraction(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}

/// Adds `values`, returning `None` if the sum overflows.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use parafiscal_core::calculations::common::checked_sum;
///
/// assert_eq!(checked_sum(&[dec!(500000), dec!(640000), dec!(20880)]), Some(dec!(1160880)));
/// assert_eq!(checked_sum(&[Decimal::MAX, dec!(1)]), None);
/// ```
pub fn checked_sum(values: &[Decimal]) -> Option<Decimal> {
    values
        .iter()
        .try_fold(Decimal::ZERO, |total, value| total.checked_add(*value))
}

/// Restricts `value` to the optional `floor` and `ceiling`.
///
/// A missing bound leaves that side unrestricted. The caller guarantees
/// `floor <= ceiling` when both are present.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use parafiscal_core::calculations::common::clamp_between;
///
/// assert_eq!(clamp_between(dec!(50), Some(dec!(100)), None), dec!(100));
/// assert_eq!(clamp_between(dec!(500), None, Some(dec!(300))), dec!(300));
/// assert_eq!(clamp_between(dec!(200), Some(dec!(100)), Some(dec!(300))), dec!(200));
/// ```
pub fn clamp_between(
    value: Decimal,
    floor: Option<Decimal>,
    ceiling: Option<Decimal>,
) -> Decimal {
    let value = floor.map_or(value, |floor| max(value, floor));
    ceiling.map_or(value, |ceiling| value.min(ceiling))
}
