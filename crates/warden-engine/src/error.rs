//! Error types for authorization operations
//!
//! Validation and not-found conditions are raised immediately as domain
//! errors; store failures are propagated unmodified with no retries.
//! Resolution and aggregation never fail on missing intermediate data:
//! dangling references contribute nothing instead of failing the call.

use thiserror::Error;
use uuid::Uuid;

use warden_store::StoreError;

/// Authorization engine error types.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The parent role of a candidate inheritance edge does not exist
    #[error("Parent role not found: {0}")]
    ParentRoleNotFound(Uuid),

    /// The child role of a candidate inheritance edge does not exist
    #[error("Child role not found: {0}")]
    ChildRoleNotFound(Uuid),

    /// A role cannot inherit from itself
    #[error("Role cannot inherit from itself: {0}")]
    SelfInheritance(Uuid),

    /// The candidate edge would close a loop in the inheritance graph
    #[error("Inheritance from {parent_role_id} to {child_role_id} would create a cycle")]
    CycleDetected {
        /// Parent side of the rejected edge
        parent_role_id: Uuid,
        /// Child side of the rejected edge
        child_role_id: Uuid,
    },

    /// An underlying store operation failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            EngineError::ParentRoleNotFound(_) | EngineError::ChildRoleNotFound(_) => 404,
            EngineError::SelfInheritance(_) => 400,
            EngineError::CycleDetected { .. } => 409,
            EngineError::Store(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::ParentRoleNotFound(_) => "PARENT_ROLE_NOT_FOUND",
            EngineError::ChildRoleNotFound(_) => "CHILD_ROLE_NOT_FOUND",
            EngineError::SelfInheritance(_) => "SELF_INHERITANCE",
            EngineError::CycleDetected { .. } => "INHERITANCE_CYCLE",
            EngineError::Store(_) => "STORE_ERROR",
        }
    }
}
