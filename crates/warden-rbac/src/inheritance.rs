//! Role inheritance edges
//!
//! A directed `(parent, child)` pair meaning the child role additionally
//! grants every permission the parent role grants. The full edge set must
//! stay acyclic; that invariant is enforced by the engine's cycle guard at
//! creation time. Edges are created and deleted individually, never updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directed inheritance edge between two roles.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use warden_rbac::RoleInheritance;
///
/// let parent = Uuid::now_v7();
/// let child = Uuid::now_v7();
/// let edge = RoleInheritance::new(parent, child);
/// assert!(!edge.is_self_referential());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleInheritance {
    /// Unique edge ID
    pub id: Uuid,

    /// The role whose permissions are inherited
    pub parent_role_id: Uuid,

    /// The role that inherits the parent's permissions
    pub child_role_id: Uuid,

    /// When the edge was created
    pub created_at: DateTime<Utc>,
}

impl RoleInheritance {
    /// Creates a new inheritance edge.
    ///
    /// # Arguments
    ///
    /// * `parent_role_id` - The role being inherited from
    /// * `child_role_id` - The role inheriting
    pub fn new(parent_role_id: Uuid, child_role_id: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            parent_role_id,
            child_role_id,
            created_at: Utc::now(),
        }
    }

    /// Check whether the edge points a role at itself.
    pub fn is_self_referential(&self) -> bool {
        self.parent_role_id == self.child_role_id
    }
}
