//! Core error types

use thiserror::Error;

/// Errors raised while preparing the built-in tables and rule chains.
///
/// Normalization itself never fails; these only surface when a table is
/// loaded from an external source and the caller asks for the error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Table configuration could not be parsed
    #[error("failed to parse {name} tables: {reason}")]
    TableParse {
        /// Table set name (language code)
        name: String,
        /// Parser message
        reason: String,
    },

    /// Table configuration describes a different language than requested
    #[error("table code mismatch: expected {expected}, got {actual}")]
    CodeMismatch {
        /// Requested language code
        expected: String,
        /// Code declared by the table file
        actual: String,
    },

    /// A rule pattern failed to compile
    #[error("invalid rule pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Offending pattern
        pattern: String,
        /// Compiler message
        reason: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
