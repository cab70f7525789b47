// ============================================================================
// Domain Models Module
// Built-in operation kinds and factory configuration
// ============================================================================

pub mod config;
pub mod operation_kind;

pub use config::{FactoryConfig, MAX_RESULT_SCALE};
pub use operation_kind::OperationKind;
