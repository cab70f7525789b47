// ============================================================================
// Multiplication
// a * b
// ============================================================================

use crate::interfaces::{Operation, OperationResult};
use crate::numeric::{checked_mul, Operand};

/// Multiplies the two operands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Multiplication;

impl Multiplication {
    pub fn new() -> Self {
        Self
    }
}

impl Operation for Multiplication {
    fn name(&self) -> &str {
        "Multiplication"
    }

    fn compute(&self, a: Operand, b: Operand) -> OperationResult<Operand> {
        Ok(checked_mul(a, b)?)
    }
}
