//! Role Model (RBAC)

use serde::{Deserialize, Serialize};

/// Role id 1 is Super Admin: immutable, implicitly holds every
/// permission.
pub const SUPER_ADMIN_ROLE_ID: i64 = 1;

/// Role entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

impl Role {
    pub fn is_super_admin(&self) -> bool {
        self.id == SUPER_ADMIN_ROLE_ID
    }
}

/// Permission entity, grouped for the role matrix editor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub name: String,
    /// Stable identifier checked by the client-side gate
    /// (e.g. "products:write")
    pub slug: String,
    pub description: Option<String>,
    pub group_name: String,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Update role payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Replace a role's permission set (`POST /roles/{id}/permissions`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissionsUpdate {
    pub permission_ids: Vec<i64>,
}
