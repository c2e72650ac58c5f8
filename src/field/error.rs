//! Error types for field arithmetic

use thiserror::Error;

/// Errors raised by [`Field`](super::Field) operations and field construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Operand is not an element of the field it was passed to
    #[error("{value} is not an element of {field}")]
    OutOfDomain { value: String, field: String },

    /// Surd operand built for a different radicand
    #[error("radicand mismatch: field is sqrt({expected}), element uses sqrt({found})")]
    RadicandMismatch { expected: i64, found: i64 },

    /// Reciprocal or division by the zero element
    #[error("division by zero")]
    DivisionByZero,

    /// Field construction argument rejected
    #[error("invalid field configuration: {0}")]
    InvalidConfiguration(String),

    /// Extended Euclid ended with a non-unit gcd; the modulus is reducible
    #[error("field modulus {modulus:#x} is not irreducible")]
    ModulusNotIrreducible { modulus: u32 },

    /// Intermediate value does not fit the element representation
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),
}

/// Type alias for Result with FieldError
pub type Result<T> = std::result::Result<T, FieldError>;
