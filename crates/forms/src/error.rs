//! Error raised when a client response does not fit its form.

use thiserror::Error;

/// A client response that failed validation.
///
/// Produced only by response processing; never recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected a sequence response, got {kind}")]
    NotASequence { kind: &'static str },

    #[error("expected a sequence of size {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("invalid type/value for element {label}")]
    InvalidValue { label: String },
}

impl ValidationError {
    /// Label of the offending element, for value-level failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidValue { label } => Some(label),
            _ => None,
        }
    }
}

/// Result type alias using ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;
