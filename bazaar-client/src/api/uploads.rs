//! Uploads / Image Management API
//!
//! The upload endpoints take multipart form data (field `image`) and
//! answer with the stored resource URL.

use serde_json::Value;
use shared::models::{ImageUsage, UploadedImage};
use shared::response::ApiResponse;

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    /// Stored banner images
    pub async fn banner_images(&self) -> ClientResult<ApiResponse<Vec<UploadedImage>>> {
        self.get("/uploads/banners").await
    }

    /// Every stored image, all folders
    pub async fn all_images(&self) -> ClientResult<ApiResponse<Vec<UploadedImage>>> {
        self.get("/uploads/all").await
    }

    /// Whether any banner still references the file
    pub async fn check_banner_image_usage(
        &self,
        filename: &str,
    ) -> ClientResult<ApiResponse<ImageUsage>> {
        self.get(&format!("/uploads/banners/{}/check", filename))
            .await
    }

    pub async fn delete_banner_image(&self, filename: &str) -> ClientResult<ApiResponse<Value>> {
        self.delete(&format!("/uploads/banners/{}", filename)).await
    }

    pub async fn delete_image(
        &self,
        folder: &str,
        filename: &str,
    ) -> ClientResult<ApiResponse<Value>> {
        self.delete(&format!("/uploads/{}/{}", folder, filename))
            .await
    }

    /// Upload a general image
    pub async fn upload_image(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> ClientResult<ApiResponse<UploadedImage>> {
        self.upload("/uploads/image", filename, bytes, mime).await
    }

    /// Upload a banner image (cropped to its position upstream)
    pub async fn upload_banner_image(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> ClientResult<ApiResponse<UploadedImage>> {
        self.upload("/uploads/banner", filename, bytes, mime).await
    }
}
