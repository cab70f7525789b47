// ============================================================================
// Addition
// a + b
// ============================================================================

use crate::interfaces::{Operation, OperationResult};
use crate::numeric::{checked_add, Operand};

/// Adds the second operand to the first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Addition;

impl Addition {
    pub fn new() -> Self {
        Self
    }
}

impl Operation for Addition {
    fn name(&self) -> &str {
        "Addition"
    }

    fn compute(&self, a: Operand, b: Operand) -> OperationResult<Operand> {
        Ok(checked_add(a, b)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::OperationError;
    use crate::numeric::{parse_operand, NumericError};
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        parse_operand(s).unwrap()
    }

    #[test]
    fn test_addition_cases() {
        let op = Addition::new();
        let cases = [
            ("positive_numbers", "5", "3", "8"),
            ("negative_numbers", "-5", "-3", "-8"),
            ("mixed_signs", "-5", "3", "-2"),
            ("zero_sum", "5", "-5", "0"),
            ("decimals", "5.5", "3.3", "8.8"),
            ("large_numbers", "1e10", "1e10", "20000000000"),
        ];

        for (name, a, b, expected) in cases {
            assert_eq!(
                op.execute(dec(a), dec(b)).unwrap(),
                dec(expected),
                "Failed case: {}",
                name
            );
        }
    }

    #[test]
    fn test_addition_overflow() {
        let result = Addition.execute(Decimal::MAX, Decimal::ONE);
        assert_eq!(result, Err(OperationError::Numeric(NumericError::Overflow)));
    }

    #[test]
    fn test_addition_name() {
        assert_eq!(Addition.name(), "Addition");
    }
}
