//! Role domain model
//!
//! A role is a named bundle of permissions, optionally scoped to a single
//! organization. Roles participate in an inheritance graph maintained by
//! the authorization engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A role that can be granted permissions and assigned to users.
///
/// Roles are either organization-scoped or system-wide (global):
/// - **Organization-scoped**: `organization_id` is set; the role exists
///   within a single tenant.
/// - **Global**: `organization_id` is `None`; the role applies platform-wide.
///
/// The `code` is an immutable, uppercase, underscore-delimited identifier
/// (e.g., `BILLING_ADMIN`) used to reference the role programmatically.
/// System roles (`is_system`) are seeded by the platform and are not
/// mutable through normal update paths; that restriction is enforced by
/// the management services, not by this crate.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use warden_rbac::Role;
///
/// let role = Role::new("SUPPORT_AGENT", "Support Agent");
/// assert!(role.is_global());
///
/// let org_role = Role::new("SUPPORT_AGENT", "Support Agent")
///     .with_organization(Uuid::now_v7());
/// assert!(!org_role.is_global());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Unique role ID
    pub id: Uuid,

    /// Owning organization; `None` means the role is system-wide
    pub organization_id: Option<Uuid>,

    /// Immutable uppercase underscore-delimited identifier
    pub code: String,

    /// Human-readable role name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Whether this is a platform-seeded system role
    pub is_system: bool,

    /// When the role was created
    pub created_at: DateTime<Utc>,
}

impl Role {
    /// Creates a new global role.
    ///
    /// The role is created with:
    /// - A newly generated UUID v7 ID
    /// - No organization scope
    /// - `is_system` set to false
    /// - Current timestamp for created_at
    ///
    /// # Arguments
    ///
    /// * `code` - Immutable role code (e.g., `BILLING_ADMIN`)
    /// * `name` - Human-readable name
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_rbac::Role;
    ///
    /// let role = Role::new("BILLING_ADMIN", "Billing Administrator");
    /// assert_eq!(role.code, "BILLING_ADMIN");
    /// assert!(!role.is_system);
    /// ```
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            organization_id: None,
            code: code.into(),
            name: name.into(),
            description: None,
            is_system: false,
            created_at: Utc::now(),
        }
    }

    /// Scope this role to an organization.
    ///
    /// # Arguments
    ///
    /// * `organization_id` - The owning organization ID
    pub fn with_organization(mut self, organization_id: Uuid) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    /// Set the role description.
    ///
    /// # Arguments
    ///
    /// * `description` - The description text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark this role as a platform-seeded system role.
    pub fn as_system(mut self) -> Self {
        self.is_system = true;
        self
    }

    /// Check whether this role is system-wide (not scoped to an organization).
    pub fn is_global(&self) -> bool {
        self.organization_id.is_none()
    }
}

/// Check whether a string is a valid role code.
///
/// Valid codes are non-empty, uppercase, underscore-delimited identifiers:
/// segments of `A-Z` and `0-9` separated by single underscores, starting
/// with a letter.
///
/// # Examples
///
/// ```
/// use warden_rbac::role::is_valid_code;
///
/// assert!(is_valid_code("BILLING_ADMIN"));
/// assert!(is_valid_code("L2_SUPPORT"));
/// assert!(!is_valid_code("billing_admin"));
/// assert!(!is_valid_code("_ADMIN"));
/// assert!(!is_valid_code(""));
/// ```
pub fn is_valid_code(code: &str) -> bool {
    if code.is_empty() {
        return false;
    }

    let mut prev_underscore = true; // rejects a leading underscore
    for (i, c) in code.chars().enumerate() {
        match c {
            'A'..='Z' => prev_underscore = false,
            '0'..='9' => {
                // First character must be a letter
                if i == 0 {
                    return false;
                }
                prev_underscore = false;
            }
            '_' => {
                // No leading, trailing, or doubled underscores
                if prev_underscore {
                    return false;
                }
                prev_underscore = true;
            }
            _ => return false,
        }
    }

    !prev_underscore
}
