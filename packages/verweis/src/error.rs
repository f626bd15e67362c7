//! Error types for citation references.

use thiserror::Error;

/// Error type for building and accessing reference chains.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerweisError {
    /// A chain was built from something other than one reference or a
    /// non-empty sequence of references.
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Indexed access past the end of a chain.
    #[error("Index {index} out of range for chain of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl VerweisError {
    pub(crate) fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result type alias for citation operations.
pub type Result<T> = std::result::Result<T, VerweisError>;
