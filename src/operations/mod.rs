// ============================================================================
// Operations Module
// Built-in arithmetic operations and the factory that creates them by name
// ============================================================================

mod addition;
mod arithmetic;
mod division;
mod multiplication;
mod rounded;
mod subtraction;

pub mod factory;

pub use addition::Addition;
pub use arithmetic::{add, divide, multiply, subtract};
pub use division::{Division, DIVISION_BY_ZERO};
pub use factory::{
    create_operation, operation_names, register, register_operation, OperationConstructor,
    OperationFactory,
};
pub use multiplication::Multiplication;
pub use rounded::Rounded;
pub use subtraction::Subtraction;
