//! Engine error types

use sayable_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core table or rule error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Lexicon file could not be read or written
    #[error("lexicon error in {path}: {reason}")]
    Lexicon {
        /// Lexicon file path
        path: String,
        /// What went wrong
        reason: String,
    },

    /// A lexicon entry could not be compiled into a matcher
    #[error("invalid lexicon term '{term}': {reason}")]
    InvalidTerm {
        /// The offending term
        term: String,
        /// Compiler message
        reason: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Json(err.to_string())
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(err: toml::de::Error) -> Self {
        EngineError::ConfigError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
