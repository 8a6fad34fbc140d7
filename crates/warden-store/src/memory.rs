//! In-memory store implementation
//!
//! This is suitable for single-process deployments and testing. Production
//! systems implement the store traits over their own database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::traits::{
    PermissionStore, RoleInheritanceStore, RolePermissionStore, RoleStore, UserRoleStore,
};
use warden_rbac::{Permission, Role, RoleInheritance, RolePermission, UserRole};

/// In-memory implementation of all five store contracts.
///
/// Relation rows (edges, grants, assignments) are kept in insertion order,
/// so lookups return rows in the order they were written and aggregate
/// results are reproducible across runs.
///
/// Cloning is cheap; clones share the same underlying collections.
///
/// # Example
///
/// ```
/// use warden_rbac::{Role, UserRole};
/// use warden_store::{MemoryStore, UserRoleStore};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = MemoryStore::new();
/// let role = store.insert_role(Role::new("AUDITOR", "Auditor")).await;
///
/// let user_id = uuid::Uuid::now_v7();
/// store.insert_assignment(UserRole::new(user_id, role.id)).await;
///
/// let assignments = store.find_by_user_id(user_id).await.unwrap();
/// assert_eq!(assignments.len(), 1);
/// # }
/// ```
#[derive(Clone, Default)]
pub struct MemoryStore {
    /// Roles by ID
    roles: Arc<RwLock<HashMap<Uuid, Role>>>,
    /// Permissions by ID
    permissions: Arc<RwLock<HashMap<Uuid, Permission>>>,
    /// Inheritance edges in insertion order
    edges: Arc<RwLock<Vec<RoleInheritance>>>,
    /// Role-permission grants in insertion order
    grants: Arc<RwLock<Vec<RolePermission>>>,
    /// User-role assignments in insertion order
    assignments: Arc<RwLock<Vec<UserRole>>>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").finish()
    }
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a role, returning the stored value.
    pub async fn insert_role(&self, role: Role) -> Role {
        let mut roles = self.roles.write().await;
        roles.insert(role.id, role.clone());
        role
    }

    /// Insert a permission, returning the stored value.
    pub async fn insert_permission(&self, permission: Permission) -> Permission {
        let mut permissions = self.permissions.write().await;
        permissions.insert(permission.id, permission.clone());
        permission
    }

    /// Insert a role-permission grant, returning the stored value.
    pub async fn insert_grant(&self, grant: RolePermission) -> RolePermission {
        let mut grants = self.grants.write().await;
        grants.push(grant.clone());
        grant
    }

    /// Insert a user-role assignment, returning the stored value.
    pub async fn insert_assignment(&self, assignment: UserRole) -> UserRole {
        let mut assignments = self.assignments.write().await;
        assignments.push(assignment.clone());
        assignment
    }

    /// Remove an assignment by ID (revocation). Returns whether a row was removed.
    pub async fn remove_assignment(&self, id: Uuid) -> bool {
        let mut assignments = self.assignments.write().await;
        let before = assignments.len();
        assignments.retain(|a| a.id != id);
        assignments.len() != before
    }

    /// Remove a permission by ID. Returns whether a row was removed.
    ///
    /// Grants referencing the permission are left in place; the engine
    /// skips dangling references during aggregation.
    pub async fn remove_permission(&self, id: Uuid) -> bool {
        let mut permissions = self.permissions.write().await;
        permissions.remove(&id).is_some()
    }
}

#[async_trait]
impl RoleStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Role>> {
        let roles = self.roles.read().await;
        Ok(roles.get(&id).cloned())
    }
}

#[async_trait]
impl PermissionStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Permission>> {
        let permissions = self.permissions.read().await;
        Ok(permissions.get(&id).cloned())
    }
}

#[async_trait]
impl RoleInheritanceStore for MemoryStore {
    async fn find_by_child_id(&self, role_id: Uuid) -> StoreResult<Vec<RoleInheritance>> {
        let edges = self.edges.read().await;
        Ok(edges
            .iter()
            .filter(|e| e.child_role_id == role_id)
            .cloned()
            .collect())
    }

    async fn find_by_parent_id(&self, role_id: Uuid) -> StoreResult<Vec<RoleInheritance>> {
        let edges = self.edges.read().await;
        Ok(edges
            .iter()
            .filter(|e| e.parent_role_id == role_id)
            .cloned()
            .collect())
    }

    async fn create(&self, edge: RoleInheritance) -> StoreResult<RoleInheritance> {
        let mut edges = self.edges.write().await;
        edges.push(edge.clone());
        Ok(edge)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut edges = self.edges.write().await;
        let before = edges.len();
        edges.retain(|e| e.id != id);
        Ok(edges.len() != before)
    }
}

#[async_trait]
impl UserRoleStore for MemoryStore {
    async fn find_by_user_id(&self, user_id: Uuid) -> StoreResult<Vec<UserRole>> {
        let assignments = self.assignments.read().await;
        Ok(assignments
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RolePermissionStore for MemoryStore {
    async fn find_by_role_id(&self, role_id: Uuid) -> StoreResult<Vec<RolePermission>> {
        let grants = self.grants.read().await;
        Ok(grants
            .iter()
            .filter(|g| g.role_id == role_id)
            .cloned()
            .collect())
    }
}
