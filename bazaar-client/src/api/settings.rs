//! Settings and Social Links API

use serde_json::Value;
use shared::models::{
    SettingsUpdate, SiteSettings, SocialCreate, SocialLink, SocialUpdate, StatusUpdate,
};
use shared::response::ApiResponse;

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    pub async fn settings(&self) -> ClientResult<ApiResponse<SiteSettings>> {
        self.get("/settings").await
    }

    pub async fn update_settings(
        &self,
        update: &SettingsUpdate,
    ) -> ClientResult<ApiResponse<SiteSettings>> {
        self.put("/settings", update).await
    }

    pub async fn socials(&self) -> ClientResult<ApiResponse<Vec<SocialLink>>> {
        self.get("/socials").await
    }

    pub async fn create_social(
        &self,
        social: &SocialCreate,
    ) -> ClientResult<ApiResponse<SocialLink>> {
        self.post("/socials", social).await
    }

    pub async fn update_social(
        &self,
        id: i64,
        update: &SocialUpdate,
    ) -> ClientResult<ApiResponse<SocialLink>> {
        self.put(&format!("/socials/{}", id), update).await
    }

    pub async fn set_social_status(
        &self,
        id: i64,
        is_active: bool,
    ) -> ClientResult<ApiResponse<Value>> {
        self.patch(&format!("/socials/{}/status", id), &StatusUpdate { is_active })
            .await
    }

    pub async fn delete_social(&self, id: i64) -> ClientResult<ApiResponse<Value>> {
        self.delete(&format!("/socials/{}", id)).await
    }
}
