// ============================================================================
// Division
// a / b, rejecting a zero divisor during validation
// ============================================================================

use crate::interfaces::{Operation, OperationError, OperationResult};
use crate::numeric::{checked_div, Operand};

/// Message carried by the validation failure for a zero divisor
pub const DIVISION_BY_ZERO: &str = "Division by zero is not allowed";

/// Divides the first operand by the second
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Division;

impl Division {
    pub fn new() -> Self {
        Self
    }
}

impl Operation for Division {
    fn name(&self) -> &str {
        "Division"
    }

    fn validate(&self, _a: Operand, b: Operand) -> OperationResult<()> {
        if b.is_zero() {
            return Err(OperationError::validation(DIVISION_BY_ZERO));
        }
        Ok(())
    }

    fn compute(&self, a: Operand, b: Operand) -> OperationResult<Operand> {
        Ok(checked_div(a, b)?)
    }
}
