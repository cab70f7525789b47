// ============================================================================
// Decimal Operations Library
// Exact decimal arithmetic behind a pluggable, name-based operation factory
// ============================================================================

//! # Decimal Operations
//!
//! Binary arithmetic over [`rust_decimal::Decimal`] with a common
//! [`Operation`](interfaces::Operation) contract and a factory that creates
//! operations by name.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** (`5.5 * 3.3 == 18.15`, no float drift)
//! - **Validate-then-compute** template: every `execute` runs the operation's
//!   precondition check first
//! - **Runtime registration** of new operations under case-insensitive names
//! - **Configurable result rounding** per factory
//!
//! ## Example
//!
//! ```rust
//! use decimal_ops::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let op = create_operation("divide").unwrap();
//! assert_eq!(op.execute(Decimal::from(6), Decimal::from(2)).unwrap(), Decimal::from(3));
//!
//! let err = op.execute(Decimal::from(5), Decimal::ZERO).unwrap_err();
//! assert_eq!(err.message(), "Division by zero is not allowed");
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod operations;

#[cfg(feature = "logging")]
pub mod logging;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{FactoryConfig, OperationKind};
    pub use crate::interfaces::{Operation, OperationError, OperationResult};
    pub use crate::numeric::{parse_operand, NumericError, Operand, RoundingMode};
    pub use crate::operations::{
        create_operation, register, register_operation, Addition, Division, Multiplication,
        OperationFactory, Subtraction,
    };
}
