//! Roles, Permissions and Admin Users API

use serde::Serialize;
use serde_json::Value;
use shared::models::{
    AdminCreate, AdminQuery, AdminStatus, AdminUpdate, AdminUser, DashboardStats, Permission, Role,
    RoleCreate, RolePermissionsUpdate, RoleUpdate,
};
use shared::response::{ApiResponse, Paginated};

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    // ========== Roles ==========

    pub async fn roles(&self) -> ClientResult<ApiResponse<Vec<Role>>> {
        self.get("/roles").await
    }

    pub async fn create_role(&self, role: &RoleCreate) -> ClientResult<ApiResponse<Role>> {
        self.post("/roles", role).await
    }

    pub async fn update_role(
        &self,
        id: i64,
        update: &RoleUpdate,
    ) -> ClientResult<ApiResponse<Role>> {
        self.put(&format!("/roles/{}", id), update).await
    }

    pub async fn delete_role(&self, id: i64) -> ClientResult<ApiResponse<Value>> {
        self.delete(&format!("/roles/{}", id)).await
    }

    /// The full permission catalog for the role matrix editor
    pub async fn all_permissions(&self) -> ClientResult<ApiResponse<Vec<Permission>>> {
        self.get("/roles/permissions").await
    }

    pub async fn role_permissions(
        &self,
        role_id: i64,
    ) -> ClientResult<ApiResponse<Vec<Permission>>> {
        self.get(&format!("/roles/{}/permissions", role_id)).await
    }

    pub async fn set_role_permissions(
        &self,
        role_id: i64,
        permission_ids: &[i64],
    ) -> ClientResult<ApiResponse<Value>> {
        self.post(
            &format!("/roles/{}/permissions", role_id),
            &RolePermissionsUpdate {
                permission_ids: permission_ids.to_vec(),
            },
        )
        .await
    }

    // ========== Admin Users ==========

    pub async fn admin_users(
        &self,
        query: &AdminQuery,
    ) -> ClientResult<ApiResponse<Paginated<AdminUser>>> {
        let pairs = query.query_pairs();
        self.get_query("/admin/users", &pairs).await
    }

    pub async fn create_admin_user(
        &self,
        user: &AdminCreate,
    ) -> ClientResult<ApiResponse<AdminUser>> {
        self.post("/admin/users", user).await
    }

    pub async fn update_admin_user(
        &self,
        id: &str,
        update: &AdminUpdate,
    ) -> ClientResult<ApiResponse<AdminUser>> {
        self.patch(&format!("/admin/users/{}", id), update).await
    }

    /// The status endpoint takes the textual status, not a boolean
    pub async fn set_admin_user_status(
        &self,
        id: &str,
        is_active: bool,
    ) -> ClientResult<ApiResponse<Value>> {
        #[derive(Serialize)]
        struct AdminStatusBody {
            status: AdminStatus,
        }
        let status = if is_active {
            AdminStatus::Active
        } else {
            AdminStatus::Inactive
        };
        self.patch(
            &format!("/admin/users/{}/status", id),
            &AdminStatusBody { status },
        )
        .await
    }

    pub async fn delete_admin_user(&self, id: &str) -> ClientResult<ApiResponse<Value>> {
        self.delete(&format!("/admin/users/{}", id)).await
    }

    /// Dashboard counters
    pub async fn dashboard_stats(&self) -> ClientResult<ApiResponse<DashboardStats>> {
        self.get("/admin/stats").await
    }
}
