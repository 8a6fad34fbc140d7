//! Store contracts consumed by the authorization engine
//!
//! Each trait exposes only the lookups the engine actually performs, so a
//! backend can implement them over whatever schema it already has. All
//! operations are asynchronous and return [`StoreResult`].

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;
use warden_rbac::{Permission, Role, RoleInheritance, RolePermission, UserRole};

/// Read access to roles.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Look up a role by ID.
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Role>>;
}

/// Read access to permissions.
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// Look up a permission by ID.
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Permission>>;
}

/// Read/write access to role inheritance edges.
#[async_trait]
pub trait RoleInheritanceStore: Send + Sync {
    /// Edges where the given role is the child, i.e. its direct parents.
    async fn find_by_child_id(&self, role_id: Uuid) -> StoreResult<Vec<RoleInheritance>>;

    /// Edges where the given role is the parent, i.e. its direct children.
    ///
    /// Not used during resolution; listing endpoints consume this.
    async fn find_by_parent_id(&self, role_id: Uuid) -> StoreResult<Vec<RoleInheritance>>;

    /// Persist a new edge.
    ///
    /// Callers must run the engine's cycle guard first; the store persists
    /// whatever it is handed.
    async fn create(&self, edge: RoleInheritance) -> StoreResult<RoleInheritance>;

    /// Delete an edge by ID. Returns whether an edge was removed.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

/// Read access to user-role assignments.
#[async_trait]
pub trait UserRoleStore: Send + Sync {
    /// All assignments held by a user, active or expired.
    async fn find_by_user_id(&self, user_id: Uuid) -> StoreResult<Vec<UserRole>>;
}

/// Read access to role-permission grants.
#[async_trait]
pub trait RolePermissionStore: Send + Sync {
    /// All grants attached to a role.
    async fn find_by_role_id(&self, role_id: Uuid) -> StoreResult<Vec<RolePermission>>;
}
