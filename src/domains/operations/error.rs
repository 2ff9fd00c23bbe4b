//! Operation-specific error types.

use thiserror::Error;

use super::definitions::OperationKind;
use super::models::Operands;

/// Errors that can occur while serving an arithmetic request.
#[derive(Debug, Error)]
pub enum OperationError {
    /// An operand was missing, empty, or not a number.
    #[error("Invalid input: a and b must be numbers")]
    InvalidInput,

    /// Division with a zero divisor.
    #[error("Division by zero is not allowed")]
    DivisionByZero { operands: Operands },

    /// The result overflowed to a value JSON cannot carry.
    #[error("{operation} of {a} and {b} does not produce a finite number")]
    NonFiniteResult {
        operation: OperationKind,
        a: f64,
        b: f64,
    },

    /// Any other unexpected failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OperationError {
    /// Create a division-by-zero error carrying the offending operands.
    pub fn division_by_zero(a: f64, b: f64) -> Self {
        Self::DivisionByZero {
            operands: Operands { a, b },
        }
    }

    /// Create an overflow error.
    pub fn non_finite(operation: OperationKind, a: f64, b: f64) -> Self {
        Self::NonFiniteResult { operation, a, b }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
