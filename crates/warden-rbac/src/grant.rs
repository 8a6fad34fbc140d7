//! Role-permission grants
//!
//! A grant links a role to a permission. Grants may carry a free-form
//! `conditions` object; the authorization engine persists and returns it
//! but never evaluates it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A link granting one permission to one role.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use warden_rbac::RolePermission;
///
/// let grant = RolePermission::new(Uuid::now_v7(), Uuid::now_v7())
///     .with_conditions(serde_json::json!({ "ip_range": "10.0.0.0/8" }));
/// assert!(grant.conditions.is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePermission {
    /// Unique grant ID
    pub id: Uuid,

    /// The role receiving the permission
    pub role_id: Uuid,

    /// The permission being granted
    pub permission_id: Uuid,

    /// Optional condition metadata, carried through unevaluated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<serde_json::Value>,

    /// When the grant was created
    pub created_at: DateTime<Utc>,
}

impl RolePermission {
    /// Creates a new grant with no conditions.
    ///
    /// # Arguments
    ///
    /// * `role_id` - The role receiving the permission
    /// * `permission_id` - The permission being granted
    pub fn new(role_id: Uuid, permission_id: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            role_id,
            permission_id,
            conditions: None,
            created_at: Utc::now(),
        }
    }

    /// Attach condition metadata to this grant.
    ///
    /// Conditions are stored and returned as-is; nothing in the platform
    /// evaluates them yet.
    pub fn with_conditions(mut self, conditions: serde_json::Value) -> Self {
        self.conditions = Some(conditions);
        self
    }
}
