// ============================================================================
// Subtraction
// a - b
// ============================================================================

use crate::interfaces::{Operation, OperationResult};
use crate::numeric::{checked_sub, Operand};

/// Subtracts the second operand from the first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Subtraction;

impl Subtraction {
    pub fn new() -> Self {
        Self
    }
}

impl Operation for Subtraction {
    fn name(&self) -> &str {
        "Subtraction"
    }

    fn compute(&self, a: Operand, b: Operand) -> OperationResult<Operand> {
        Ok(checked_sub(a, b)?)
    }
}
