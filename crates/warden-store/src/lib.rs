//! # Warden Store Contracts
//!
//! This crate defines the narrow, asynchronous store interfaces the Warden
//! authorization engine reads from, together with an in-memory backend for
//! single-process deployments and tests.
//!
//! ## Overview
//!
//! The warden-store crate provides:
//! - **Store traits**: One contract per entity collection, exposing only
//!   the lookups the engine needs
//! - **MemoryStore**: A `tokio::sync::RwLock`-backed implementation of all
//!   five contracts (feature `memory`, enabled by default)
//!
//! Production deployments supply their own implementations (SQL, KV, ...)
//! behind the same traits; the engine is wired against trait objects and
//! has no opinion on the persistence technology.
//!
//! ## Usage
//!
//! ```rust
//! use warden_rbac::Role;
//! use warden_store::{MemoryStore, RoleStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = MemoryStore::new();
//! let role = store.insert_role(Role::new("AUDITOR", "Auditor")).await;
//!
//! let found = store.find_by_id(role.id).await.unwrap();
//! assert!(found.is_some());
//! # }
//! ```

pub mod error;
#[cfg(feature = "memory")]
pub mod memory;
pub mod traits;

// Re-export main types for convenience
pub use error::{StoreError, StoreResult};
#[cfg(feature = "memory")]
pub use memory::MemoryStore;
pub use traits::{
    PermissionStore, RoleInheritanceStore, RolePermissionStore, RoleStore, UserRoleStore,
};
