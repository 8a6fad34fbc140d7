//! # Warden Authorization Engine
//!
//! This crate computes what a user is allowed to do on the Warden
//! platform: it resolves role inheritance, aggregates effective
//! permissions across time-bound assignments, answers permission checks,
//! and guards the inheritance graph against cycles.
//!
//! ## Overview
//!
//! The warden-engine crate provides:
//! - **InheritanceResolver**: The full ancestor set of a role, walking
//!   child→parent edges to arbitrary depth with diamond deduplication
//! - **AuthorizationEngine**: Effective-permission aggregation, permission
//!   checks, and cycle-guarded inheritance-edge creation/deletion
//! - **EngineError**: The domain error taxonomy shared by all operations
//!
//! ## Architecture
//!
//! ```text
//! user_has_permission(user, code)
//!   └─ user_permissions(user)
//!        ├─ UserRoleStore::find_by_user_id     (drop expired assignments)
//!        ├─ InheritanceResolver::resolve        (per assigned role)
//!        │    └─ RoleInheritanceStore::find_by_child_id  (BFS upward)
//!        ├─ RolePermissionStore::find_by_role_id (per effective role)
//!        └─ PermissionStore::find_by_id          (dedup by permission id)
//! ```
//!
//! The engine holds no state between calls; every answer is computed
//! fresh from the stores. Store failures propagate unmodified, while
//! missing intermediate data (an orphaned grant, a dangling permission
//! reference) is silently excluded from results.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use warden_engine::AuthorizationEngine;
//! use warden_rbac::{Permission, Role, RolePermission, UserRole};
//! use warden_store::MemoryStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), warden_engine::EngineError> {
//! let store = Arc::new(MemoryStore::new());
//! let engine = AuthorizationEngine::with_store(store.clone());
//!
//! // An editor role that inherits everything a viewer can do
//! let viewer = store.insert_role(Role::new("VIEWER", "Viewer")).await;
//! let editor = store.insert_role(Role::new("EDITOR", "Editor")).await;
//! engine.create_role_inheritance(viewer.id, editor.id).await?;
//!
//! let read = store
//!     .insert_permission(Permission::new(uuid::Uuid::now_v7(), "docs", "page", "read"))
//!     .await;
//! store.insert_grant(RolePermission::new(viewer.id, read.id)).await;
//!
//! let user_id = uuid::Uuid::now_v7();
//! store.insert_assignment(UserRole::new(user_id, editor.id)).await;
//!
//! // The editor assignment carries the inherited viewer grant
//! assert!(engine.user_has_permission(user_id, "DOCS_PAGE_READ", None).await?);
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
mod guard;
pub mod resolver;

// Re-export main types for convenience
pub use engine::AuthorizationEngine;
pub use error::{EngineError, EngineResult};
pub use resolver::InheritanceResolver;
