//! Error taxonomy for the algorithm library.
//!
//! Every fallible operation returns [`AlgoResult`]. Operations that are total
//! over their input domain (empty sequences included) return plain values, and
//! "no match" outcomes such as a missing non-repeating character are `None`,
//! not errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for library operations
pub type AlgoResult<T> = Result<T, AlgoError>;

/// High-level error kind, stable across variants carrying different context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgoErrorKind {
    /// Input violates a documented precondition.
    InvalidInput,
    /// A result does not fit the primitive integer width.
    Overflow,
}

impl std::fmt::Display for AlgoErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid_input"),
            Self::Overflow => write!(f, "overflow"),
        }
    }
}

/// Errors raised by library operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    #[error("value {value} at index {index} is not a binary digit")]
    NonBinaryElement { index: usize, value: i64 },

    #[error("Fibonacci index must be non-negative, got {0}")]
    NegativeIndex(i64),

    #[error("malformed run-length text at char {position}: {reason}")]
    MalformedRunLength { position: usize, reason: String },

    #[error("Fibonacci term {index} exceeds u64")]
    FibonacciOverflow { index: usize },
}

impl AlgoError {
    /// The taxonomy kind of this error.
    pub fn kind(&self) -> AlgoErrorKind {
        match self {
            Self::NonBinaryElement { .. }
            | Self::NegativeIndex(_)
            | Self::MalformedRunLength { .. } => AlgoErrorKind::InvalidInput,
            Self::FibonacciOverflow { .. } => AlgoErrorKind::Overflow,
        }
    }

    pub(crate) fn malformed(position: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRunLength {
            position,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            AlgoError::NonBinaryElement { index: 2, value: 7 }.kind(),
            AlgoErrorKind::InvalidInput
        );
        assert_eq!(AlgoError::NegativeIndex(-1).kind(), AlgoErrorKind::InvalidInput);
        assert_eq!(
            AlgoError::malformed(0, "missing count").kind(),
            AlgoErrorKind::InvalidInput
        );
        assert_eq!(
            AlgoError::FibonacciOverflow { index: 94 }.kind(),
            AlgoErrorKind::Overflow
        );
    }

    #[test]
    fn test_error_display() {
        let err = AlgoError::NonBinaryElement { index: 3, value: 2 };
        let display = err.to_string();
        assert!(display.contains("index 3"));
        assert!(display.contains("value 2"));

        assert!(AlgoError::NegativeIndex(-5).to_string().contains("-5"));
        assert!(AlgoError::malformed(4, "zero count")
            .to_string()
            .contains("zero count"));
    }

    #[test]
    fn test_kind_display_and_serde() {
        assert_eq!(AlgoErrorKind::InvalidInput.to_string(), "invalid_input");
        assert_eq!(AlgoErrorKind::Overflow.to_string(), "overflow");

        let json = serde_json::to_string(&AlgoErrorKind::InvalidInput).unwrap();
        assert_eq!(json, "\"invalid_input\"");
        let parsed: AlgoErrorKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, AlgoErrorKind::InvalidInput);
    }
}
