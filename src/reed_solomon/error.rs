//! Error and outcome types for Reed-Solomon coding
//!
//! Hard failures (bad configuration, wrong lengths, out-of-domain symbols) are
//! [`RsError`]s. Running out of correction capacity is *not* an error: it is
//! reported through [`DecodeOutcome::Uncorrectable`], which callers are
//! expected to handle as an ordinary result.

use crate::field::FieldError;
use crate::matrix::MatrixError;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while constructing or driving the codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Input sequence has the wrong number of symbols
    #[error("invalid {what} length: expected {expected}, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Codec construction argument rejected
    #[error("invalid codec configuration: {0}")]
    InvalidConfiguration(String),

    /// Requested correction capacity exceeds what the ECC length allows
    #[error("number of errors to correct ({requested}) exceeds maximum of {max}")]
    ErrorsToCorrectOutOfRange { requested: usize, max: usize },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Type alias for Result with RsError
pub type RsResult<T> = Result<T, RsError>;

/// Why a corrupted codeword could not be corrected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UncorrectableReason {
    /// Syndromes are non-zero but zero errors were requested
    NoCorrectionCapacity,
    /// The syndrome system for the error-locator polynomial has no solution
    InconsistentLocatorSystem,
    /// The locator polynomial has no roots at codeword positions
    NoErrorLocations,
    /// More roots than the requested correction capacity
    TooManyErrorLocations { found: usize, max: usize },
    /// The error-magnitude system has no solution
    InconsistentMagnitudeSystem,
}

impl fmt::Display for UncorrectableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UncorrectableReason::NoCorrectionCapacity => {
                write!(f, "errors detected but no correction capacity requested")
            }
            UncorrectableReason::InconsistentLocatorSystem => {
                write!(f, "error-locator system is inconsistent")
            }
            UncorrectableReason::NoErrorLocations => {
                write!(f, "no error locations found")
            }
            UncorrectableReason::TooManyErrorLocations { found, max } => {
                write!(f, "found {found} error locations, can correct at most {max}")
            }
            UncorrectableReason::InconsistentMagnitudeSystem => {
                write!(f, "error-magnitude system is inconsistent")
            }
        }
    }
}

/// Result of decoding a codeword
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome<E> {
    /// The recovered message symbols
    Decoded(Vec<E>),
    /// Corruption exceeds the correction capacity
    Uncorrectable(UncorrectableReason),
    /// A claimed correction left non-zero syndromes. This is unreachable with
    /// a consistent field and a primitive generator; seeing it points at a
    /// misconfigured codec.
    InvariantViolation { residual_syndromes: Vec<E> },
}

impl<E> DecodeOutcome<E> {
    pub fn is_decoded(&self) -> bool {
        matches!(self, DecodeOutcome::Decoded(_))
    }

    /// The message, if decoding succeeded
    pub fn message(&self) -> Option<&[E]> {
        match self {
            DecodeOutcome::Decoded(message) => Some(message),
            _ => None,
        }
    }

    pub fn into_message(self) -> Option<Vec<E>> {
        match self {
            DecodeOutcome::Decoded(message) => Some(message),
            _ => None,
        }
    }
}
