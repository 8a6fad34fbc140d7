//! # Warden RBAC Entity Model
//!
//! This crate provides the role-based access control entities for the
//! Warden platform, shared by the store contracts and the authorization
//! engine.
//!
//! ## Overview
//!
//! The warden-rbac crate defines:
//! - **Roles**: Named permission bundles, optionally scoped to an organization
//! - **Permissions**: Atomic capabilities with canonical `MODULE_RESOURCE_ACTION` codes
//! - **Inheritance edges**: Directed parent→child relations between roles
//! - **Grants**: Role→permission links with optional condition metadata
//! - **Assignments**: Time-bound user→role links
//!
//! ## Architecture
//!
//! ```text
//! User
//!   └─ UserRole (assignment, may expire) ─→ Role
//!                                             ├─ RoleInheritance ─→ parent Role
//!                                             └─ RolePermission ─→ Permission
//! ```
//!
//! A role grants its own permissions plus, transitively, every permission
//! granted by its ancestors in the inheritance graph. The graph is kept
//! acyclic by the engine's cycle guard at edge-creation time; the entities
//! here carry no enforcement of their own beyond local invariants.
//!
//! ## Usage
//!
//! ```rust
//! use uuid::Uuid;
//! use warden_rbac::{Permission, Role, RolePermission, UserRole};
//!
//! let org_id = Uuid::now_v7();
//! let role = Role::new("BILLING_ADMIN", "Billing Administrator").with_organization(org_id);
//!
//! let module_id = Uuid::now_v7();
//! let perm = Permission::new(module_id, "billing", "invoice", "read");
//! assert_eq!(perm.code, "BILLING_INVOICE_READ");
//!
//! let grant = RolePermission::new(role.id, perm.id);
//! let assignment = UserRole::new(Uuid::now_v7(), role.id);
//! assert!(!assignment.is_expired());
//! # let _ = grant;
//! ```

pub mod assignment;
pub mod grant;
pub mod inheritance;
pub mod permission;
pub mod role;

// Re-export main types for convenience
pub use assignment::UserRole;
pub use grant::RolePermission;
pub use inheritance::RoleInheritance;
pub use permission::Permission;
pub use role::Role;
