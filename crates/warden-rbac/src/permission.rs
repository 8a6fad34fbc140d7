//! Permission domain model
//!
//! A permission is an atomic capability owned by a module, identified by a
//! canonical `MODULE_RESOURCE_ACTION` code. Permissions are immutable once
//! created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An atomic capability that can be granted to roles.
///
/// The canonical `code` is composed from the owning module's code plus the
/// free-form `resource` and `action` strings, uppercased and joined with
/// underscores (e.g., module `billing`, resource `invoice`, action `read`
/// → `BILLING_INVOICE_READ`).
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use warden_rbac::Permission;
///
/// let module_id = Uuid::now_v7();
/// let perm = Permission::new(module_id, "billing", "invoice", "read");
/// assert_eq!(perm.code, "BILLING_INVOICE_READ");
/// assert_eq!(perm.resource, "invoice");
/// assert_eq!(perm.action, "read");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    /// Unique permission ID
    pub id: Uuid,

    /// Owning module ID
    pub module_id: Uuid,

    /// Canonical code in `MODULE_RESOURCE_ACTION` form
    pub code: String,

    /// Resource the permission applies to (free-form)
    pub resource: String,

    /// Action allowed on the resource (free-form)
    pub action: String,

    /// Optional description
    pub description: Option<String>,

    /// When the permission was created
    pub created_at: DateTime<Utc>,
}

impl Permission {
    /// Creates a new permission with a composed canonical code.
    ///
    /// # Arguments
    ///
    /// * `module_id` - The owning module ID
    /// * `module_code` - The owning module's code (used for the canonical code)
    /// * `resource` - The resource string
    /// * `action` - The action string
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use warden_rbac::Permission;
    ///
    /// let perm = Permission::new(Uuid::now_v7(), "reporting", "dashboard", "export");
    /// assert_eq!(perm.code, "REPORTING_DASHBOARD_EXPORT");
    /// ```
    pub fn new(
        module_id: Uuid,
        module_code: impl AsRef<str>,
        resource: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        let resource = resource.into();
        let action = action.into();
        let code = Self::compose_code(module_code.as_ref(), &resource, &action);

        Self {
            id: Uuid::now_v7(),
            module_id,
            code,
            resource,
            action,
            description: None,
            created_at: Utc::now(),
        }
    }

    /// Set the permission description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Compose a canonical permission code.
    ///
    /// Uppercases each part and joins them with underscores.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_rbac::Permission;
    ///
    /// let code = Permission::compose_code("billing", "invoice", "read");
    /// assert_eq!(code, "BILLING_INVOICE_READ");
    /// ```
    pub fn compose_code(module_code: &str, resource: &str, action: &str) -> String {
        format!(
            "{}_{}_{}",
            module_code.to_uppercase(),
            resource.to_uppercase(),
            action.to_uppercase()
        )
    }
}
