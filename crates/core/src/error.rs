//! Core Error Types
//!
//! Defines the foundational error types used across the Life Dash workspace.
//! These error types are dependency-free (only thiserror + std + serde_json)
//! to keep the core crate lightweight.

use thiserror::Error;

/// Core error type for the Life Dash workspace.
///
/// Storage backends and services share this single taxonomy so that the host
/// can report failures as discrete, actionable messages.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration errors (e.g. no vault root could be resolved)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Logical index outside the targeted subset
    #[error("Not found: {0}")]
    NotFound(String),

    /// An expected document is absent and not auto-provisionable
    #[error("Document missing: {0}")]
    DocumentMissing(String),

    /// Parse errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a document missing error
    pub fn document_missing(msg: impl Into<String>) -> Self {
        Self::DocumentMissing(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
