//! Error types for taskgrid
//!
//! Centralized error handling using thiserror. None of these errors
//! escape the store's public operations; they surface only on the
//! storage backend trait and the codec functions, where the store
//! catches and logs them.

use thiserror::Error;

/// All error types that can occur in taskgrid
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage backend unavailable or misbehaving
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error from a file-backed storage backend
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Persisted timestamp failed to parse
    #[error("Timestamp error: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// Result type alias for taskgrid operations
pub type Result<T> = std::result::Result<T, StoreError>;
