//! Products API

use serde::Serialize;
use serde_json::Value;
use shared::models::{Product, ProductSave, ProductSearchQuery, ProductStatus, SavedProductQuery};
use shared::response::{ApiResponse, Paginated};

use crate::error::ClientResult;
use crate::http::ApiClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemIdBody<'a> {
    item_id: &'a str,
}

impl ApiClient {
    /// Search the marketplace catalog
    pub async fn search_products(
        &self,
        query: &ProductSearchQuery,
    ) -> ClientResult<ApiResponse<Paginated<Product>>> {
        let pairs = query.query_pairs();
        self.get_query("/products/search", &pairs).await
    }

    /// Check whether an item is already saved
    pub async fn check_product(&self, item_id: &str) -> ClientResult<ApiResponse<Value>> {
        self.post("/products/check", &ItemIdBody { item_id }).await
    }

    /// Save a product into the catalog
    pub async fn save_product(&self, product: &ProductSave) -> ClientResult<ApiResponse<Product>> {
        self.post("/products/save", product).await
    }

    /// List saved products with pagination, filters and sorting
    pub async fn saved_products(
        &self,
        query: &SavedProductQuery,
    ) -> ClientResult<ApiResponse<Paginated<Product>>> {
        let pairs = query.query_pairs();
        self.get_query("/products/saved", &pairs).await
    }

    /// Re-fetch a single product from the marketplace
    pub async fn sync_single(
        &self,
        item_id: &str,
        search_name: &str,
    ) -> ClientResult<ApiResponse<Product>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct SyncSingleBody<'a> {
            item_id: &'a str,
            search_name: &'a str,
        }
        self.post(
            "/products/sync-single",
            &SyncSingleBody {
                item_id,
                search_name,
            },
        )
        .await
    }

    /// Update status by backend row id
    pub async fn update_product_status(
        &self,
        id: &str,
        status: ProductStatus,
    ) -> ClientResult<ApiResponse<Value>> {
        #[derive(Serialize)]
        struct StatusBody {
            status: ProductStatus,
        }
        self.patch(&format!("/products/{}/status", id), &StatusBody { status })
            .await
    }

    /// Update status by marketplace item id
    pub async fn update_product_status_by_item(
        &self,
        item_id: &str,
        status: ProductStatus,
    ) -> ClientResult<ApiResponse<Value>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ItemStatusBody<'a> {
            item_id: &'a str,
            status: ProductStatus,
        }
        self.patch("/products/status", &ItemStatusBody { item_id, status })
            .await
    }

    /// Delete by backend row id
    pub async fn delete_product(&self, id: &str) -> ClientResult<ApiResponse<Value>> {
        self.delete(&format!("/products/{}", id)).await
    }

    /// Delete by marketplace item id
    pub async fn delete_product_by_item(&self, item_id: &str) -> ClientResult<ApiResponse<Value>> {
        self.delete_with_body("/products/delete", &ItemIdBody { item_id })
            .await
    }

    /// Toggle the flash-sale flag
    pub async fn set_flash_sale(
        &self,
        item_id: &str,
        is_flash_sale: bool,
    ) -> ClientResult<ApiResponse<Value>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct FlashSaleBody {
            is_flash_sale: bool,
        }
        self.patch(
            &format!("/products/{}/flash-sale", item_id),
            &FlashSaleBody { is_flash_sale },
        )
        .await
    }
}
