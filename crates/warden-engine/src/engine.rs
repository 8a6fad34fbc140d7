//! Authorization engine
//!
//! Computes a user's effective permissions from their active role
//! assignments and the role inheritance graph. The engine is stateless
//! between calls: every operation reads fresh from the stores and holds no
//! caches, so concurrent calls never interfere inside the engine.

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::resolver::InheritanceResolver;
use warden_rbac::Permission;
use warden_store::{
    PermissionStore, RoleInheritanceStore, RolePermissionStore, RoleStore, UserRoleStore,
};

/// The authorization-resolution engine.
///
/// Wired against the five store contracts by a composition root. Exposes
/// ancestry resolution, effective-permission aggregation, permission
/// checks, and cycle-guarded inheritance-edge management.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use warden_engine::AuthorizationEngine;
/// use warden_rbac::{Permission, Role, RolePermission, UserRole};
/// use warden_store::MemoryStore;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = Arc::new(MemoryStore::new());
/// let engine = AuthorizationEngine::with_store(store.clone());
///
/// let role = store.insert_role(Role::new("AUDITOR", "Auditor")).await;
/// let perm = store
///     .insert_permission(Permission::new(uuid::Uuid::now_v7(), "audit", "log", "read"))
///     .await;
/// store.insert_grant(RolePermission::new(role.id, perm.id)).await;
///
/// let user_id = uuid::Uuid::now_v7();
/// store.insert_assignment(UserRole::new(user_id, role.id)).await;
///
/// assert!(engine
///     .user_has_permission(user_id, "AUDIT_LOG_READ", None)
///     .await
///     .unwrap());
/// # }
/// ```
#[derive(Clone)]
pub struct AuthorizationEngine {
    pub(crate) roles: Arc<dyn RoleStore>,
    pub(crate) permissions: Arc<dyn PermissionStore>,
    pub(crate) edges: Arc<dyn RoleInheritanceStore>,
    pub(crate) assignments: Arc<dyn UserRoleStore>,
    pub(crate) grants: Arc<dyn RolePermissionStore>,
    pub(crate) resolver: InheritanceResolver,
}

impl std::fmt::Debug for AuthorizationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationEngine").finish()
    }
}

impl AuthorizationEngine {
    /// Create an engine over explicit store implementations.
    ///
    /// # Arguments
    ///
    /// * `roles` - Role lookups (existence checks for edge creation)
    /// * `permissions` - Permission lookups
    /// * `edges` - Inheritance-edge reads and writes
    /// * `assignments` - User-role assignment lookups
    /// * `grants` - Role-permission grant lookups
    pub fn new(
        roles: Arc<dyn RoleStore>,
        permissions: Arc<dyn PermissionStore>,
        edges: Arc<dyn RoleInheritanceStore>,
        assignments: Arc<dyn UserRoleStore>,
        grants: Arc<dyn RolePermissionStore>,
    ) -> Self {
        let resolver = InheritanceResolver::new(edges.clone());
        Self {
            roles,
            permissions,
            edges,
            assignments,
            grants,
            resolver,
        }
    }

    /// Create an engine over a single store implementing all five contracts.
    ///
    /// Convenient for the in-memory store and for backends that put every
    /// collection behind one handle.
    pub fn with_store<S>(store: Arc<S>) -> Self
    where
        S: RoleStore
            + PermissionStore
            + RoleInheritanceStore
            + UserRoleStore
            + RolePermissionStore
            + 'static,
    {
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
        )
    }

    /// Resolve every distinct ancestor of a role in the inheritance graph.
    ///
    /// See [`InheritanceResolver::resolve`].
    pub async fn resolve_role_inheritance(&self, role_id: Uuid) -> EngineResult<HashSet<Uuid>> {
        self.resolver.resolve(role_id).await
    }

    /// Compute every permission the user currently holds, deduplicated.
    ///
    /// Unions the grants of all active (non-expired) role assignments and
    /// their transitive ancestors. Duplicate assignments, shared ancestors,
    /// and multi-path grants collapse to a single entry per permission id.
    /// Grants whose permission no longer exists are skipped silently
    /// rather than failing the whole computation.
    pub async fn user_permissions(&self, user_id: Uuid) -> EngineResult<Vec<Permission>> {
        let assignments = self.assignments.find_by_user_id(user_id).await?;

        // Union of each active assignment's role and its ancestors.
        let mut seen_roles: HashSet<Uuid> = HashSet::new();
        let mut effective_roles: Vec<Uuid> = Vec::new();
        for assignment in assignments.iter().filter(|a| a.is_active()) {
            if seen_roles.insert(assignment.role_id) {
                effective_roles.push(assignment.role_id);
            }
            for ancestor in self.resolver.resolve_ordered(assignment.role_id).await? {
                if seen_roles.insert(ancestor) {
                    effective_roles.push(ancestor);
                }
            }
        }

        let mut seen_permissions: HashSet<Uuid> = HashSet::new();
        let mut permissions: Vec<Permission> = Vec::new();
        for role_id in &effective_roles {
            for grant in self.grants.find_by_role_id(*role_id).await? {
                if !seen_permissions.insert(grant.permission_id) {
                    continue;
                }
                if let Some(permission) = self.permissions.find_by_id(grant.permission_id).await? {
                    permissions.push(permission);
                }
            }
        }

        tracing::debug!(
            user_id = %user_id,
            effective_roles = effective_roles.len(),
            permissions = permissions.len(),
            "resolved effective permissions"
        );

        Ok(permissions)
    }

    /// Check whether the user holds a permission with the given code.
    ///
    /// `context` is accepted for forward compatibility with grant
    /// conditions; nothing evaluates it today.
    pub async fn user_has_permission(
        &self,
        user_id: Uuid,
        permission_code: &str,
        context: Option<&serde_json::Value>,
    ) -> EngineResult<bool> {
        tracing::debug!(
            user_id = %user_id,
            code = permission_code,
            has_context = context.is_some(),
            "checking permission"
        );

        let permissions = self.user_permissions(user_id).await?;
        Ok(permissions.iter().any(|p| p.code == permission_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use warden_rbac::{Permission, Role, RoleInheritance, RolePermission, UserRole};
    use warden_store::MemoryStore;

    async fn seed_role(store: &MemoryStore, code: &str) -> Role {
        store.insert_role(Role::new(code, code)).await
    }

    async fn seed_permission(store: &MemoryStore, resource: &str, action: &str) -> Permission {
        store
            .insert_permission(Permission::new(Uuid::now_v7(), "core", resource, action))
            .await
    }

    async fn grant(store: &MemoryStore, role: &Role, permission: &Permission) {
        store
            .insert_grant(RolePermission::new(role.id, permission.id))
            .await;
    }

    async fn inherit(store: &MemoryStore, parent: &Role, child: &Role) {
        store
            .create(RoleInheritance::new(parent.id, child.id))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unknown_user_has_no_permissions() {
        let store = Arc::new(MemoryStore::new());
        let engine = AuthorizationEngine::with_store(store);

        let permissions = engine.user_permissions(Uuid::now_v7()).await.unwrap();
        assert!(permissions.is_empty());
    }

    #[tokio::test]
    async fn test_direct_grant() {
        let store = Arc::new(MemoryStore::new());
        let role = seed_role(&store, "VIEWER").await;
        let perm = seed_permission(&store, "report", "read").await;
        grant(&store, &role, &perm).await;

        let user_id = Uuid::now_v7();
        store.insert_assignment(UserRole::new(user_id, role.id)).await;

        let engine = AuthorizationEngine::with_store(store);
        let permissions = engine.user_permissions(user_id).await.unwrap();

        assert_eq!(permissions.len(), 1);
        assert_eq!(permissions[0].code, "CORE_REPORT_READ");
    }

    #[tokio::test]
    async fn test_inherited_grants_through_chain() {
        // admin inherits editor inherits viewer; user holds admin only
        let store = Arc::new(MemoryStore::new());
        let viewer = seed_role(&store, "VIEWER").await;
        let editor = seed_role(&store, "EDITOR").await;
        let admin = seed_role(&store, "ADMIN").await;
        inherit(&store, &viewer, &editor).await;
        inherit(&store, &editor, &admin).await;

        let read = seed_permission(&store, "doc", "read").await;
        let write = seed_permission(&store, "doc", "write").await;
        let manage = seed_permission(&store, "doc", "manage").await;
        grant(&store, &viewer, &read).await;
        grant(&store, &editor, &write).await;
        grant(&store, &admin, &manage).await;

        let user_id = Uuid::now_v7();
        store.insert_assignment(UserRole::new(user_id, admin.id)).await;

        let engine = AuthorizationEngine::with_store(store);
        let codes: HashSet<String> = engine
            .user_permissions(user_id)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.code)
            .collect();

        assert_eq!(
            codes,
            HashSet::from([
                "CORE_DOC_READ".to_string(),
                "CORE_DOC_WRITE".to_string(),
                "CORE_DOC_MANAGE".to_string(),
            ])
        );
    }

    #[tokio::test]
    async fn test_expired_assignment_contributes_nothing() {
        let store = Arc::new(MemoryStore::new());
        let role = seed_role(&store, "CONTRACTOR").await;
        let perm = seed_permission(&store, "repo", "push").await;
        grant(&store, &role, &perm).await;

        let user_id = Uuid::now_v7();
        store
            .insert_assignment(
                UserRole::new(user_id, role.id).with_expiry(Utc::now() - Duration::hours(1)),
            )
            .await;

        let engine = AuthorizationEngine::with_store(store);
        let permissions = engine.user_permissions(user_id).await.unwrap();
        assert!(permissions.is_empty());
    }

    #[tokio::test]
    async fn test_mixed_expired_and_active_assignments() {
        let store = Arc::new(MemoryStore::new());
        let lapsed = seed_role(&store, "LAPSED").await;
        let current = seed_role(&store, "CURRENT").await;
        let old_perm = seed_permission(&store, "archive", "read").await;
        let new_perm = seed_permission(&store, "report", "read").await;
        grant(&store, &lapsed, &old_perm).await;
        grant(&store, &current, &new_perm).await;

        let user_id = Uuid::now_v7();
        store
            .insert_assignment(
                UserRole::new(user_id, lapsed.id).with_expiry(Utc::now() - Duration::minutes(5)),
            )
            .await;
        store
            .insert_assignment(UserRole::new(user_id, current.id))
            .await;

        let engine = AuthorizationEngine::with_store(store);
        let permissions = engine.user_permissions(user_id).await.unwrap();

        assert_eq!(permissions.len(), 1);
        assert_eq!(permissions[0].code, "CORE_REPORT_READ");
    }

    #[tokio::test]
    async fn test_duplicate_assignments_deduplicate() {
        let store = Arc::new(MemoryStore::new());
        let role = seed_role(&store, "VIEWER").await;
        let perm = seed_permission(&store, "report", "read").await;
        grant(&store, &role, &perm).await;

        let user_id = Uuid::now_v7();
        store.insert_assignment(UserRole::new(user_id, role.id)).await;
        store.insert_assignment(UserRole::new(user_id, role.id)).await;

        let engine = AuthorizationEngine::with_store(store);
        let permissions = engine.user_permissions(user_id).await.unwrap();
        assert_eq!(permissions.len(), 1);
    }

    #[tokio::test]
    async fn test_shared_ancestor_deduplicates() {
        // Diamond: both editor and reviewer inherit viewer; user holds both.
        // Viewer's permission must appear once.
        let store = Arc::new(MemoryStore::new());
        let viewer = seed_role(&store, "VIEWER").await;
        let editor = seed_role(&store, "EDITOR").await;
        let reviewer = seed_role(&store, "REVIEWER").await;
        inherit(&store, &viewer, &editor).await;
        inherit(&store, &viewer, &reviewer).await;

        let read = seed_permission(&store, "doc", "read").await;
        grant(&store, &viewer, &read).await;

        let user_id = Uuid::now_v7();
        store.insert_assignment(UserRole::new(user_id, editor.id)).await;
        store
            .insert_assignment(UserRole::new(user_id, reviewer.id))
            .await;

        let engine = AuthorizationEngine::with_store(store);
        let permissions = engine.user_permissions(user_id).await.unwrap();
        assert_eq!(permissions.len(), 1);
    }

    #[tokio::test]
    async fn test_direct_and_inherited_grant_deduplicates() {
        // The same permission granted to both child and parent roles.
        let store = Arc::new(MemoryStore::new());
        let parent = seed_role(&store, "PARENT").await;
        let child = seed_role(&store, "CHILD").await;
        inherit(&store, &parent, &child).await;

        let perm = seed_permission(&store, "doc", "read").await;
        grant(&store, &parent, &perm).await;
        grant(&store, &child, &perm).await;

        let user_id = Uuid::now_v7();
        store.insert_assignment(UserRole::new(user_id, child.id)).await;

        let engine = AuthorizationEngine::with_store(store);
        let permissions = engine.user_permissions(user_id).await.unwrap();
        assert_eq!(permissions.len(), 1);
    }

    #[tokio::test]
    async fn test_dangling_grant_is_skipped() {
        let store = Arc::new(MemoryStore::new());
        let role = seed_role(&store, "VIEWER").await;
        let kept = seed_permission(&store, "report", "read").await;
        let removed = seed_permission(&store, "report", "export").await;
        grant(&store, &role, &kept).await;
        grant(&store, &role, &removed).await;
        store.remove_permission(removed.id).await;

        let user_id = Uuid::now_v7();
        store.insert_assignment(UserRole::new(user_id, role.id)).await;

        let engine = AuthorizationEngine::with_store(store);
        let permissions = engine.user_permissions(user_id).await.unwrap();

        assert_eq!(permissions.len(), 1);
        assert_eq!(permissions[0].code, "CORE_REPORT_READ");
    }

    #[tokio::test]
    async fn test_has_permission_matches_aggregate() {
        let store = Arc::new(MemoryStore::new());
        let role = seed_role(&store, "VIEWER").await;
        let perm = seed_permission(&store, "report", "read").await;
        grant(&store, &role, &perm).await;

        let user_id = Uuid::now_v7();
        store.insert_assignment(UserRole::new(user_id, role.id)).await;

        let engine = AuthorizationEngine::with_store(store);

        assert!(engine
            .user_has_permission(user_id, "CORE_REPORT_READ", None)
            .await
            .unwrap());
        assert!(!engine
            .user_has_permission(user_id, "CORE_REPORT_EXPORT", None)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_context_is_ignored() {
        let store = Arc::new(MemoryStore::new());
        let role = seed_role(&store, "VIEWER").await;
        let perm = seed_permission(&store, "report", "read").await;
        grant(&store, &role, &perm).await;

        let user_id = Uuid::now_v7();
        store.insert_assignment(UserRole::new(user_id, role.id)).await;

        let engine = AuthorizationEngine::with_store(store);
        let context = serde_json::json!({ "ip": "203.0.113.7" });

        // Same verdict with or without context
        assert!(engine
            .user_has_permission(user_id, "CORE_REPORT_READ", Some(&context))
            .await
            .unwrap());
        assert!(engine
            .user_has_permission(user_id, "CORE_REPORT_READ", None)
            .await
            .unwrap());
    }
}
