//! Error types for Inferir operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Inferir operations.
///
/// Covers structural input problems (shape mismatches, empty inputs) and
/// invalid hyperparameters. Numeric edge cases inside scoring (unseen
/// categorical values, zero variance) are handled with floor constants and
/// never surface through this type.
///
/// # Examples
///
/// ```
/// use inferir::error::InferirError;
///
/// let err = InferirError::DimensionMismatch {
///     expected: "rows=100".to_string(),
///     actual: "50".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum InferirError {
    /// Input shapes don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for InferirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferirError::DimensionMismatch { expected, actual } => {
                write!(f, "Input dimension mismatch: expected {expected}, got {actual}")
            }
            InferirError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            InferirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for InferirError {}

impl From<&str> for InferirError {
    fn from(msg: &str) -> Self {
        InferirError::Other(msg.to_string())
    }
}

impl From<String> for InferirError {
    fn from(msg: String) -> Self {
        InferirError::Other(msg)
    }
}

impl InferirError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for InferirError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<InferirError> for &str {
    fn eq(&self, other: &InferirError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, InferirError>;
