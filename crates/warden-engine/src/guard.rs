//! Inheritance-edge creation and the cycle guard
//!
//! Adding a parent→child edge is the one mutation that can corrupt the
//! role graph, so it is validated here: both roles must exist, a role may
//! not inherit from itself, and the edge must not close a loop. Deleting
//! an edge needs no guard because removal cannot create a cycle.

use std::collections::{HashSet, VecDeque};

use uuid::Uuid;

use crate::engine::AuthorizationEngine;
use crate::error::{EngineError, EngineResult};
use warden_rbac::RoleInheritance;
use warden_store::{RoleInheritanceStore, RoleStore};

impl AuthorizationEngine {
    /// Create an inheritance edge after validating it keeps the graph sound.
    ///
    /// Validation order: parent exists, child exists, no self-reference,
    /// no cycle. Nothing is written unless every check passes.
    ///
    /// The cycle check and the write are not one atomic step: two
    /// concurrent calls that each pass the check against the same graph
    /// state can jointly close a loop. Backends must serialize edge writes
    /// (a transaction or uniqueness/ordering constraint) to close that
    /// window; the engine cannot.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ParentRoleNotFound`] / [`EngineError::ChildRoleNotFound`]
    ///   if either role does not exist
    /// - [`EngineError::SelfInheritance`] if both sides are the same role
    /// - [`EngineError::CycleDetected`] if the edge would close a loop
    pub async fn create_role_inheritance(
        &self,
        parent_role_id: Uuid,
        child_role_id: Uuid,
    ) -> EngineResult<RoleInheritance> {
        if self.roles.find_by_id(parent_role_id).await?.is_none() {
            return Err(EngineError::ParentRoleNotFound(parent_role_id));
        }
        if self.roles.find_by_id(child_role_id).await?.is_none() {
            return Err(EngineError::ChildRoleNotFound(child_role_id));
        }
        if parent_role_id == child_role_id {
            return Err(EngineError::SelfInheritance(parent_role_id));
        }
        if self.would_close_cycle(parent_role_id, child_role_id).await? {
            return Err(EngineError::CycleDetected {
                parent_role_id,
                child_role_id,
            });
        }

        let edge = self
            .edges
            .create(RoleInheritance::new(parent_role_id, child_role_id))
            .await?;

        tracing::debug!(
            parent_role_id = %parent_role_id,
            child_role_id = %child_role_id,
            edge_id = %edge.id,
            "created role inheritance edge"
        );

        Ok(edge)
    }

    /// Delete an inheritance edge by ID. Returns whether an edge was removed.
    pub async fn delete_role_inheritance(&self, edge_id: Uuid) -> EngineResult<bool> {
        let removed = self.edges.delete(edge_id).await?;
        if removed {
            tracing::debug!(edge_id = %edge_id, "deleted role inheritance edge");
        }
        Ok(removed)
    }

    /// Check whether inserting `parent → child` would close a loop.
    ///
    /// Walks upward from the candidate parent through existing parent
    /// edges. Finding the candidate child up there means the child is
    /// already an ancestor of the parent, and the new edge would complete
    /// a cycle. The visited set bounds the walk to each node once.
    async fn would_close_cycle(
        &self,
        parent_role_id: Uuid,
        child_role_id: Uuid,
    ) -> EngineResult<bool> {
        let mut visited: HashSet<Uuid> = HashSet::new();
        let mut queue: VecDeque<Uuid> = VecDeque::new();
        queue.push_back(parent_role_id);

        while let Some(current) = queue.pop_front() {
            if current == child_role_id {
                return Ok(true);
            }
            if !visited.insert(current) {
                continue;
            }

            for edge in self.edges.find_by_child_id(current).await? {
                if !visited.contains(&edge.parent_role_id) {
                    queue.push_back(edge.parent_role_id);
                }
            }
        }

        Ok(false)
    }
}
