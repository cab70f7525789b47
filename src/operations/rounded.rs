// ============================================================================
// Rounded Operation
// Adapter that rounds the result of another operation to a fixed scale
// ============================================================================

use crate::interfaces::{Operation, OperationResult};
use crate::numeric::{round_to_scale, Operand, RoundingMode};

/// Wraps an operation and rounds every computed result.
///
/// Validation and naming are forwarded unchanged, so a rounded `Division`
/// still rejects a zero divisor and still reports itself as "Division".
#[derive(Debug)]
pub struct Rounded {
    inner: Box<dyn Operation>,
    scale: u32,
    mode: RoundingMode,
}

impl Rounded {
    pub fn new(inner: Box<dyn Operation>, scale: u32, mode: RoundingMode) -> Self {
        Self { inner, scale, mode }
    }

    /// Number of decimal places results are rounded to
    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl Operation for Rounded {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn validate(&self, a: Operand, b: Operand) -> OperationResult<()> {
        self.inner.validate(a, b)
    }

    fn compute(&self, a: Operand, b: Operand) -> OperationResult<Operand> {
        let exact = self.inner.compute(a, b)?;
        Ok(round_to_scale(exact, self.scale, self.mode))
    }

    /// Rounds whatever the inner `execute` produces, so an inner type that
    /// replaces `execute` keeps its behavior behind the adapter.
    fn execute(&self, a: Operand, b: Operand) -> OperationResult<Operand> {
        let exact = self.inner.execute(a, b)?;
        Ok(round_to_scale(exact, self.scale, self.mode))
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{Division, Multiplication};
    use rust_decimal::Decimal;

    #[test]
    fn test_rounds_result() {
        let op = Rounded::new(Box::new(Division), 2, RoundingMode::HalfUp);
        let result = op.execute(Decimal::from(2), Decimal::from(3)).unwrap();
        assert_eq!(result, Decimal::new(67, 2));
        assert_eq!(op.scale(), 2);
    }

    #[test]
    fn test_exact_results_untouched() {
        let op = Rounded::new(Box::new(Multiplication), 4, RoundingMode::HalfEven);
        let result = op.execute(Decimal::new(55, 1), Decimal::new(33, 1)).unwrap();
        assert_eq!(result, Decimal::new(1815, 2));
    }

    #[test]
    fn test_forwards_validation_and_name() {
        let op = Rounded::new(Box::new(Division), 2, RoundingMode::Down);
        assert_eq!(op.name(), "Division");
        assert!(op
            .execute(Decimal::ONE, Decimal::ZERO)
            .unwrap_err()
            .is_validation());
    }

    /// Replaces `execute` and never reaches `compute`
    #[derive(Debug)]
    struct FixedResult;

    impl Operation for FixedResult {
        fn name(&self) -> &str {
            "FixedResult"
        }

        fn compute(&self, _a: Operand, _b: Operand) -> OperationResult<Operand> {
            Ok(Decimal::ZERO)
        }

        fn execute(&self, _a: Operand, _b: Operand) -> OperationResult<Operand> {
            Ok(Decimal::new(12345, 3))
        }
    }

    #[test]
    fn test_rounds_inner_execute_override() {
        let op = Rounded::new(Box::new(FixedResult), 2, RoundingMode::HalfUp);
        assert_eq!(
            op.execute(Decimal::ONE, Decimal::ONE).unwrap(),
            Decimal::new(1235, 2)
        );
    }
}
