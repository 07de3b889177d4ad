//! Banners, Banner Positions and Banner Campaigns API

use serde_json::Value;
use shared::models::{
    Banner, BannerCampaign, BannerCreate, BannerPosition, BannerUpdate, CampaignCreate,
    CampaignUpdate, PositionCreate, PositionUpdate, StatusUpdate,
};
use shared::response::ApiResponse;

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    // ========== Banners ==========

    pub async fn banners(&self) -> ClientResult<ApiResponse<Vec<Banner>>> {
        self.get("/banners").await
    }

    /// Create a banner. A duplicate `sort_order` within the position
    /// comes back as a 409 through the normal error path.
    pub async fn create_banner(&self, banner: &BannerCreate) -> ClientResult<ApiResponse<Banner>> {
        self.post("/banners", banner).await
    }

    pub async fn update_banner(
        &self,
        id: i64,
        update: &BannerUpdate,
    ) -> ClientResult<ApiResponse<Banner>> {
        self.put(&format!("/banners/{}", id), update).await
    }

    pub async fn set_banner_status(
        &self,
        id: i64,
        is_active: bool,
    ) -> ClientResult<ApiResponse<Value>> {
        self.patch(&format!("/banners/{}/status", id), &StatusUpdate { is_active })
            .await
    }

    pub async fn delete_banner(&self, id: i64) -> ClientResult<ApiResponse<Value>> {
        self.delete(&format!("/banners/{}", id)).await
    }

    // ========== Banner Positions ==========

    pub async fn banner_positions(&self) -> ClientResult<ApiResponse<Vec<BannerPosition>>> {
        self.get("/banner-positions").await
    }

    pub async fn create_banner_position(
        &self,
        position: &PositionCreate,
    ) -> ClientResult<ApiResponse<BannerPosition>> {
        self.post("/banner-positions", position).await
    }

    pub async fn update_banner_position(
        &self,
        id: i64,
        update: &PositionUpdate,
    ) -> ClientResult<ApiResponse<BannerPosition>> {
        self.put(&format!("/banner-positions/{}", id), update).await
    }

    pub async fn set_banner_position_status(
        &self,
        id: i64,
        is_active: bool,
    ) -> ClientResult<ApiResponse<Value>> {
        self.patch(
            &format!("/banner-positions/{}/status", id),
            &StatusUpdate { is_active },
        )
        .await
    }

    pub async fn delete_banner_position(&self, id: i64) -> ClientResult<ApiResponse<Value>> {
        self.delete(&format!("/banner-positions/{}", id)).await
    }

    // ========== Banner Campaigns ==========

    pub async fn banner_campaigns(&self) -> ClientResult<ApiResponse<Vec<BannerCampaign>>> {
        self.get("/banner-campaigns").await
    }

    pub async fn create_banner_campaign(
        &self,
        campaign: &CampaignCreate,
    ) -> ClientResult<ApiResponse<BannerCampaign>> {
        self.post("/banner-campaigns", campaign).await
    }

    pub async fn update_banner_campaign(
        &self,
        id: i64,
        update: &CampaignUpdate,
    ) -> ClientResult<ApiResponse<BannerCampaign>> {
        self.put(&format!("/banner-campaigns/{}", id), update).await
    }

    pub async fn set_banner_campaign_status(
        &self,
        id: i64,
        is_active: bool,
    ) -> ClientResult<ApiResponse<Value>> {
        self.patch(
            &format!("/banner-campaigns/{}/status", id),
            &StatusUpdate { is_active },
        )
        .await
    }

    pub async fn delete_banner_campaign(&self, id: i64) -> ClientResult<ApiResponse<Value>> {
        self.delete(&format!("/banner-campaigns/{}", id)).await
    }
}
