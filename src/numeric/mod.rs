// ============================================================================
// Numeric Module
// Exact decimal arithmetic helpers shared by every operation
// ============================================================================
//
// This module provides:
// - Operand: the decimal type every operation consumes and produces
// - parse_operand: text to Operand, including scientific notation
// - checked_*: range-checked arithmetic returning NumericResult
// - NumericError: Error types for parsing and arithmetic
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)

mod errors;
mod operand;

pub use errors::{NumericError, NumericResult};
pub use operand::{
    checked_add, checked_div, checked_mul, checked_sub, parse_operand, round_to_scale, Operand,
    RoundingMode,
};
