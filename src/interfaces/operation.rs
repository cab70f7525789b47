// ============================================================================
// Operation Interface
// Defines the contract every arithmetic operation implements
// ============================================================================

use super::errors::OperationResult;
use crate::numeric::Operand;
use std::fmt;

/// Strategy pattern interface for binary arithmetic operations
/// Implementations: Addition, Subtraction, Multiplication, Division, plus
/// anything registered with the operation factory.
///
/// `execute` is a template method: it always runs `validate` before
/// `compute`, so an implementation only overrides `validate` to add
/// preconditions. Implementations must not override `execute` to skip
/// `validate`; adapters such as `Rounded` forward to the inner `execute`.
pub trait Operation: Send + Sync + fmt::Debug {
    /// Display name of the operation (e.g. "Addition")
    fn name(&self) -> &str;

    /// Check operand preconditions. The default accepts every pair.
    ///
    /// # Errors
    /// Implementations return `OperationError::Validation` when the operands
    /// cannot be combined.
    fn validate(&self, _a: Operand, _b: Operand) -> OperationResult<()> {
        Ok(())
    }

    /// Perform the arithmetic on already validated operands
    fn compute(&self, a: Operand, b: Operand) -> OperationResult<Operand>;

    /// Validate the operands, then compute the result
    ///
    /// # Arguments
    /// * `a` - First operand
    /// * `b` - Second operand
    ///
    /// # Returns
    /// The exact decimal result, or the first failure encountered
    fn execute(&self, a: Operand, b: Operand) -> OperationResult<Operand> {
        if let Err(err) = self.validate(a, b) {
            tracing::debug!(operation = self.name(), %a, %b, %err, "operand validation failed");
            return Err(err);
        }
        self.compute(a, b)
    }

    /// Human-readable description, the operation name by default
    fn describe(&self) -> String {
        self.name().to_string()
    }
}

impl fmt::Display for dyn Operation + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.describe())
    }
}
