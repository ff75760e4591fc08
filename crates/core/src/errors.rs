//! Error types for the salarycast core layer

use thiserror::Error;

/// Errors that can occur in the core layer
#[derive(Error, Debug)]
pub enum CoreError {
    /// Artifact columns do not line up with the serving field set
    #[error("schema mismatch: {0}")]
    Schema(String),

    /// Artifact bytes failed digest verification
    #[error("artifact integrity failure: {0}")]
    Integrity(String),

    /// Model parameters are structurally invalid
    #[error("invalid model parameters: {0}")]
    InvalidParameters(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
