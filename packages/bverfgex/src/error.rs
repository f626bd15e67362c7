//! Error types for decision loading and the command-line tool.
//!
//! Uses the dual-error pattern: `BverfgexError` for consumers of this crate,
//! wrapping `VerweisError` from the citation core.

use bverfgex_verweis::VerweisError;
use thiserror::Error;

/// Main error type for the bverfgex library.
#[derive(Debug, Error)]
pub enum BverfgexError {
    /// Building or accessing a citation chain failed.
    #[error(transparent)]
    Verweis(#[from] VerweisError),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML element.
    #[error("Missing required XML element: <{element}> in {context}")]
    MissingElement { element: String, context: String },

    /// Invalid command-line or file input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Walking a corpus directory failed.
    #[error("Failed to read corpus directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for bverfgex operations.
pub type Result<T> = std::result::Result<T, BverfgexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_display() {
        let err = BverfgexError::MissingElement {
            element: "gruende".to_string(),
            context: "decision 1bvr000123".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing required XML element: <gruende> in decision 1bvr000123"
        );
    }

    #[test]
    fn test_verweis_error_is_transparent() {
        let err = BverfgexError::from(VerweisError::IndexOutOfRange { index: 1, len: 1 });
        assert_eq!(err.to_string(), "Index 1 out of range for chain of length 1");
    }
}
