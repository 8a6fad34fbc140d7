//! Inheritance graph resolution
//!
//! Resolves the full ancestor set of a role by walking child→parent edges
//! upward. The graph is a DAG (the cycle guard rejects anything else at
//! write time), so traversal with a visited set always terminates.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use uuid::Uuid;

use crate::error::EngineResult;
use warden_store::RoleInheritanceStore;

/// Resolves transitive role ancestry over an inheritance-edge store.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use warden_engine::InheritanceResolver;
/// use warden_rbac::{Role, RoleInheritance};
/// use warden_store::{MemoryStore, RoleInheritanceStore};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = Arc::new(MemoryStore::new());
/// let admin = store.insert_role(Role::new("ADMIN", "Admin")).await;
/// let editor = store.insert_role(Role::new("EDITOR", "Editor")).await;
/// store
///     .create(RoleInheritance::new(admin.id, editor.id))
///     .await
///     .unwrap();
///
/// let resolver = InheritanceResolver::new(store);
/// let ancestors = resolver.resolve(editor.id).await.unwrap();
/// assert!(ancestors.contains(&admin.id));
/// # }
/// ```
#[derive(Clone)]
pub struct InheritanceResolver {
    edges: Arc<dyn RoleInheritanceStore>,
}

impl std::fmt::Debug for InheritanceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InheritanceResolver").finish()
    }
}

impl InheritanceResolver {
    /// Create a resolver over an inheritance-edge store.
    pub fn new(edges: Arc<dyn RoleInheritanceStore>) -> Self {
        Self { edges }
    }

    /// Resolve every distinct ancestor of a role.
    ///
    /// Follows "is parent of" edges upward from `role_id` to arbitrary
    /// depth. Diamond convergence collapses naturally; the role itself is
    /// not part of the result. A role with no edges (or one that does not
    /// exist) resolves to the empty set; existence checks belong to the
    /// callers that need them.
    pub async fn resolve(&self, role_id: Uuid) -> EngineResult<HashSet<Uuid>> {
        Ok(self.resolve_ordered(role_id).await?.into_iter().collect())
    }

    /// Resolve ancestors in breadth-first visit order.
    ///
    /// Same contents as [`resolve`](Self::resolve); the stable ordering
    /// keeps downstream aggregation reproducible.
    pub(crate) async fn resolve_ordered(&self, role_id: Uuid) -> EngineResult<Vec<Uuid>> {
        let mut visited: HashSet<Uuid> = HashSet::new();
        let mut order: Vec<Uuid> = Vec::new();
        let mut queue: VecDeque<Uuid> = VecDeque::new();
        queue.push_back(role_id);

        while let Some(current) = queue.pop_front() {
            // A node can be enqueued twice before its first visit; query
            // each distinct node exactly once.
            if !visited.insert(current) {
                continue;
            }
            if current != role_id {
                order.push(current);
            }

            for edge in self.edges.find_by_child_id(current).await? {
                if !visited.contains(&edge.parent_role_id) {
                    queue.push_back(edge.parent_role_id);
                }
            }
        }

        Ok(order)
    }
}
