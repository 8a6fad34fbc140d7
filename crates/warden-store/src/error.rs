//! Store error types
//!
//! Implementations translate their backend failures into these variants;
//! the engine propagates them unmodified and performs no retries.

use thiserror::Error;

/// Store error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to reach the backing store
    #[error("Connection error: {0}")]
    Connection(String),

    /// The backing store rejected or failed the operation
    #[error("Backend error: {0}")]
    Backend(String),

    /// A stored row could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
