//! User-role assignments
//!
//! An assignment is a time-bound grant of a role to a user. Expiry is a
//! derived predicate: an assignment with `expires_at` in the past simply
//! stops contributing permissions, with no state transition recorded.
//! Revocation is an explicit delete performed by the management services.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A grant of a role to a specific user.
///
/// A user may hold multiple simultaneous assignments, including duplicates
/// pointing at the same role; the authorization engine deduplicates when
/// aggregating.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use uuid::Uuid;
/// use warden_rbac::UserRole;
///
/// let permanent = UserRole::new(Uuid::now_v7(), Uuid::now_v7());
/// assert!(!permanent.is_expired());
///
/// let temporary = UserRole::new(Uuid::now_v7(), Uuid::now_v7())
///     .with_expiry(Utc::now() + Duration::days(30));
/// assert!(temporary.is_active());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRole {
    /// Unique assignment ID
    pub id: Uuid,

    /// The user receiving the role
    pub user_id: Uuid,

    /// The assigned role
    pub role_id: Uuid,

    /// Who performed the assignment (if recorded)
    pub assigned_by: Option<Uuid>,

    /// When the assignment was made
    pub assigned_at: DateTime<Utc>,

    /// When the assignment lapses; `None` means permanent
    pub expires_at: Option<DateTime<Utc>>,
}

impl UserRole {
    /// Creates a new permanent assignment.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user receiving the role
    /// * `role_id` - The role being assigned
    pub fn new(user_id: Uuid, role_id: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            role_id,
            assigned_by: None,
            assigned_at: Utc::now(),
            expires_at: None,
        }
    }

    /// Record who performed the assignment.
    ///
    /// # Arguments
    ///
    /// * `assigner_id` - The assigning user's ID
    pub fn with_assigner(mut self, assigner_id: Uuid) -> Self {
        self.assigned_by = Some(assigner_id);
        self
    }

    /// Give the assignment an expiry time.
    ///
    /// # Arguments
    ///
    /// * `expires_at` - When the assignment lapses
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Check whether the assignment has lapsed.
    ///
    /// Permanent assignments (no `expires_at`) never expire.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= Utc::now(),
            None => false,
        }
    }

    /// Check whether the assignment still contributes permissions.
    pub fn is_active(&self) -> bool {
        !self.is_expired()
    }
}
