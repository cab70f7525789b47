// ============================================================================
// Numeric Errors
// Error types for decimal parsing and checked arithmetic
// ============================================================================

/// Errors that can occur while parsing operands or computing results.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded Decimal::MAX
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
    /// Result below Decimal::MIN
    #[error("arithmetic underflow: result below minimum value")]
    Underflow,
    /// Zero divisor passed to `checked_div`
    #[error("division by zero")]
    DivisionByZero,
    /// Input string is not a decimal number
    #[error("invalid input: could not parse value")]
    InvalidInput,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
