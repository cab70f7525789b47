// ============================================================================
// Operands
// Parsing and checked arithmetic over rust_decimal::Decimal
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Operand type used by every operation.
pub type Operand = Decimal;

/// Parse an operand from text.
///
/// Accepts plain decimals (`"5.5"`, `"-3"`) as well as scientific notation
/// (`"1e10"`, `"2.5E-3"`). Surrounding whitespace is ignored.
///
/// # Errors
/// Returns `InvalidInput` for empty or malformed input, and `Overflow` when
/// the value cannot be represented.
///
/// # Example
/// ```
/// use decimal_ops::numeric::parse_operand;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_operand("1e10").unwrap(), Decimal::from(10_000_000_000i64));
/// assert_eq!(parse_operand(" 5.5 ").unwrap(), Decimal::new(55, 1));
/// ```
pub fn parse_operand(input: &str) -> NumericResult<Operand> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NumericError::InvalidInput);
    }

    if trimmed.contains(['e', 'E']) {
        // from_scientific keeps the mantissa exact; the exponent only moves the scale
        return Decimal::from_scientific(trimmed).map_err(|e| classify(&e));
    }

    Decimal::from_str(trimmed).map_err(|e| classify(&e))
}

fn classify(err: &rust_decimal::Error) -> NumericError {
    match err {
        rust_decimal::Error::ExceedsMaximumPossibleValue => NumericError::Overflow,
        rust_decimal::Error::LessThanMinimumPossibleValue => NumericError::Underflow,
        _ => NumericError::InvalidInput,
    }
}

/// Direction of an out-of-range result, from the sign it would have had.
#[inline]
fn out_of_range(positive: bool) -> NumericError {
    if positive {
        NumericError::Overflow
    } else {
        NumericError::Underflow
    }
}

/// Checked addition.
///
/// # Errors
/// Returns `Overflow` or `Underflow` if the result is out of range.
#[inline]
pub fn checked_add(a: Operand, b: Operand) -> NumericResult<Operand> {
    a.checked_add(b)
        .ok_or_else(|| out_of_range(b.is_sign_positive()))
}

/// Checked subtraction.
#[inline]
pub fn checked_sub(a: Operand, b: Operand) -> NumericResult<Operand> {
    a.checked_sub(b)
        .ok_or_else(|| out_of_range(b.is_sign_negative()))
}

/// Checked multiplication.
#[inline]
pub fn checked_mul(a: Operand, b: Operand) -> NumericResult<Operand> {
    a.checked_mul(b)
        .ok_or_else(|| out_of_range(a.is_sign_negative() == b.is_sign_negative()))
}

/// Checked division.
///
/// Non-terminating quotients are rounded to the 28 significant digits a
/// `Decimal` can hold.
///
/// # Errors
/// Returns `DivisionByZero` for a zero divisor, otherwise `Overflow` or
/// `Underflow` if the quotient is out of range.
#[inline]
pub fn checked_div(a: Operand, b: Operand) -> NumericResult<Operand> {
    if b.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    a.checked_div(b)
        .ok_or_else(|| out_of_range(a.is_sign_negative() == b.is_sign_negative()))
}

/// Rounding applied when a result scale is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round half to even (banker's rounding)
    #[default]
    HalfEven,
    /// Round half away from zero
    HalfUp,
    /// Truncate toward zero
    Down,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
        }
    }
}

/// Round `value` to `scale` decimal places.
///
/// Values that already have `scale` or fewer places are returned unchanged.
#[inline]
pub fn round_to_scale(value: Operand, scale: u32, mode: RoundingMode) -> Operand {
    value.round_dp_with_strategy(scale, mode.strategy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        parse_operand(s).unwrap()
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(dec("5"), Decimal::from(5));
        assert_eq!(dec("-5.5"), Decimal::new(-55, 1));
        assert_eq!(dec("  0.001 "), Decimal::new(1, 3));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(dec("1e10"), Decimal::from(10_000_000_000i64));
        assert_eq!(dec("1E5"), Decimal::from(100_000));
        assert_eq!(dec("2.5e-3"), Decimal::new(25, 4));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_operand(""), Err(NumericError::InvalidInput));
        assert_eq!(parse_operand("   "), Err(NumericError::InvalidInput));
        assert_eq!(parse_operand("abc"), Err(NumericError::InvalidInput));
        assert_eq!(parse_operand("1.2.3"), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(checked_add(dec("5.5"), dec("3.3")), Ok(dec("8.8")));
        assert_eq!(
            checked_add(Decimal::MAX, Decimal::ONE),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            checked_add(Decimal::MIN, Decimal::NEGATIVE_ONE),
            Err(NumericError::Underflow)
        );
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(checked_sub(dec("-5"), dec("-3")), Ok(dec("-2")));
        assert_eq!(
            checked_sub(Decimal::MIN, Decimal::ONE),
            Err(NumericError::Underflow)
        );
        assert_eq!(
            checked_sub(Decimal::MAX, Decimal::NEGATIVE_ONE),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_checked_mul() {
        assert_eq!(checked_mul(dec("5.5"), dec("3.3")), Ok(dec("18.15")));
        assert_eq!(
            checked_mul(Decimal::MAX, Decimal::TWO),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            checked_mul(Decimal::MAX, Decimal::from(-2)),
            Err(NumericError::Underflow)
        );
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(checked_div(dec("5.5"), dec("2")), Ok(dec("2.75")));
        assert_eq!(
            checked_div(Decimal::ONE, Decimal::ZERO),
            Err(NumericError::DivisionByZero)
        );

        // 1/3 keeps 28 significant digits
        let third = checked_div(Decimal::ONE, Decimal::from(3)).unwrap();
        assert_eq!(third.to_string(), "0.3333333333333333333333333333");
    }

    #[test]
    fn test_round_to_scale() {
        assert_eq!(
            round_to_scale(dec("2.345"), 2, RoundingMode::HalfEven),
            dec("2.34")
        );
        assert_eq!(
            round_to_scale(dec("2.345"), 2, RoundingMode::HalfUp),
            dec("2.35")
        );
        assert_eq!(round_to_scale(dec("2.349"), 2, RoundingMode::Down), dec("2.34"));
        assert_eq!(round_to_scale(dec("8"), 2, RoundingMode::HalfUp), dec("8"));
    }
}
