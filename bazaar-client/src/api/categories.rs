//! Categories API

use serde::Serialize;
use serde_json::Value;
use shared::models::{
    AssignProducts, Category, CategoryCreate, CategoryUpdate, MoveProducts, Product, StatusUpdate,
};
use shared::response::ApiResponse;

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    pub async fn categories(&self) -> ClientResult<ApiResponse<Vec<Category>>> {
        self.get("/categories").await
    }

    pub async fn create_category(&self, name: &str) -> ClientResult<ApiResponse<Category>> {
        self.post(
            "/categories",
            &CategoryCreate {
                name: name.to_string(),
            },
        )
        .await
    }

    pub async fn update_category(
        &self,
        id: i64,
        name: &str,
    ) -> ClientResult<ApiResponse<Category>> {
        self.put(
            &format!("/categories/{}", id),
            &CategoryUpdate {
                name: name.to_string(),
            },
        )
        .await
    }

    pub async fn set_category_status(
        &self,
        id: i64,
        is_active: bool,
    ) -> ClientResult<ApiResponse<Value>> {
        self.patch(
            &format!("/categories/{}/status", id),
            &StatusUpdate { is_active },
        )
        .await
    }

    pub async fn delete_category(&self, id: i64) -> ClientResult<ApiResponse<Value>> {
        self.delete(&format!("/categories/{}", id)).await
    }

    /// Products assigned to a category
    pub async fn category_products(&self, id: i64) -> ClientResult<ApiResponse<Vec<Product>>> {
        self.get(&format!("/categories/{}/products", id)).await
    }

    /// Products not assigned to any category
    pub async fn unassigned_products(&self) -> ClientResult<ApiResponse<Vec<Product>>> {
        self.get("/categories/products/unassigned").await
    }

    pub async fn assign_products_to_category(
        &self,
        category_id: i64,
        product_ids: &[String],
    ) -> ClientResult<ApiResponse<Value>> {
        self.post(
            &format!("/categories/{}/assign", category_id),
            &AssignProducts {
                product_ids: product_ids.to_vec(),
            },
        )
        .await
    }

    pub async fn unassign_products(
        &self,
        product_ids: &[String],
    ) -> ClientResult<ApiResponse<Value>> {
        self.post(
            "/categories/unassign",
            &AssignProducts {
                product_ids: product_ids.to_vec(),
            },
        )
        .await
    }

    pub async fn remove_product_from_category(
        &self,
        category_id: i64,
        item_id: &str,
    ) -> ClientResult<ApiResponse<Value>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct RemoveBody<'a> {
            item_id: &'a str,
        }
        self.post(
            &format!("/categories/{}/remove-product", category_id),
            &RemoveBody { item_id },
        )
        .await
    }

    /// Bulk move every product of one category into another
    pub async fn move_category_products(
        &self,
        source_category_id: i64,
        target_category_id: i64,
    ) -> ClientResult<ApiResponse<Value>> {
        self.post(
            &format!("/categories/{}/move-products", source_category_id),
            &MoveProducts { target_category_id },
        )
        .await
    }
}
