// ============================================================================
// Operation Errors
// Failures raised by operations and the operation factory
// ============================================================================

use crate::numeric::NumericError;

/// Errors surfaced by [`Operation::execute`](super::Operation::execute) and
/// the operation factory.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// Operands violate a precondition of the operation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No operation is registered under the requested name
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// A registration was rejected because it does not produce a usable operation
    #[error("Operation must conform to the Operation capability: {0}")]
    Registration(String),

    /// Arithmetic result out of range
    #[error(transparent)]
    Numeric(#[from] NumericError),
}

impl OperationError {
    /// Build a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        OperationError::Validation(message.into())
    }

    /// True for operand precondition failures
    pub fn is_validation(&self) -> bool {
        matches!(self, OperationError::Validation(_))
    }

    /// The human-readable message without the error-kind prefix
    pub fn message(&self) -> String {
        match self {
            OperationError::Validation(msg)
            | OperationError::UnknownOperation(msg)
            | OperationError::Registration(msg) => msg.clone(),
            OperationError::Numeric(err) => err.to_string(),
        }
    }
}

/// Result type alias for operations and the factory
pub type OperationResult<T> = Result<T, OperationError>;
