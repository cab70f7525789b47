// ============================================================================
// Arithmetic Functions
// Free-function shortcuts over the built-in operations
// ============================================================================
//
// Each function runs the matching operation through `execute`, so the
// preconditions and error kinds are exactly those of the operation itself:
// `divide(a, 0)` fails with the same validation error as `Division`.

use super::{Addition, Division, Multiplication, Subtraction};
use crate::interfaces::{Operation, OperationResult};
use crate::numeric::Operand;

/// Sum of `a` and `b`
pub fn add(a: Operand, b: Operand) -> OperationResult<Operand> {
    Addition.execute(a, b)
}

/// `b` subtracted from `a`
pub fn subtract(a: Operand, b: Operand) -> OperationResult<Operand> {
    Subtraction.execute(a, b)
}

/// Product of `a` and `b`
pub fn multiply(a: Operand, b: Operand) -> OperationResult<Operand> {
    Multiplication.execute(a, b)
}

/// `a` divided by `b`
///
/// # Errors
/// Returns a validation error when `b` is zero.
pub fn divide(a: Operand, b: Operand) -> OperationResult<Operand> {
    Division.execute(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::DIVISION_BY_ZERO;
    use rust_decimal::Decimal;

    #[test]
    fn test_free_functions() {
        let two = Decimal::TWO;
        let three = Decimal::from(3);

        assert_eq!(add(two, three), Ok(Decimal::from(5)));
        assert_eq!(subtract(two, three), Ok(Decimal::NEGATIVE_ONE));
        assert_eq!(multiply(two, three), Ok(Decimal::from(6)));
        assert_eq!(divide(Decimal::new(55, 1), two), Ok(Decimal::new(275, 2)));
    }

    #[test]
    fn test_divide_by_zero_matches_division_error() {
        let err = divide(Decimal::from(5), Decimal::ZERO).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.message(), DIVISION_BY_ZERO);
    }
}
