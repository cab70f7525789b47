// ============================================================================
// Interfaces Module
// Contains the operation contract and its error types
// ============================================================================

mod errors;
mod operation;

pub use errors::{OperationError, OperationResult};
pub use operation::Operation;
