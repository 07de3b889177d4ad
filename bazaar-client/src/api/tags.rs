//! Tags API

use serde_json::Value;
use shared::models::{
    AssignProducts, Product, ProductTagsUpdate, StatusUpdate, Tag, TagCreate, TagUpdate,
};
use shared::response::ApiResponse;

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    pub async fn tags(&self) -> ClientResult<ApiResponse<Vec<Tag>>> {
        self.get("/tags").await
    }

    pub async fn create_tag(&self, name: &str) -> ClientResult<ApiResponse<Tag>> {
        self.post(
            "/tags",
            &TagCreate {
                name: name.to_string(),
            },
        )
        .await
    }

    pub async fn update_tag(&self, id: i64, name: &str) -> ClientResult<ApiResponse<Tag>> {
        self.put(
            &format!("/tags/{}", id),
            &TagUpdate {
                name: name.to_string(),
            },
        )
        .await
    }

    pub async fn set_tag_status(
        &self,
        id: i64,
        is_active: bool,
    ) -> ClientResult<ApiResponse<Value>> {
        self.patch(&format!("/tags/{}/status", id), &StatusUpdate { is_active })
            .await
    }

    pub async fn delete_tag(&self, id: i64) -> ClientResult<ApiResponse<Value>> {
        self.delete(&format!("/tags/{}", id)).await
    }

    /// Products carrying a tag
    pub async fn tag_products(&self, id: i64) -> ClientResult<ApiResponse<Vec<Product>>> {
        self.get(&format!("/tags/{}/products", id)).await
    }

    /// Products not carrying a tag (candidates for assignment)
    pub async fn tag_unassigned_products(
        &self,
        id: i64,
    ) -> ClientResult<ApiResponse<Vec<Product>>> {
        self.get(&format!("/tags/{}/products/unassigned", id)).await
    }

    pub async fn assign_products_to_tag(
        &self,
        tag_id: i64,
        product_ids: &[String],
    ) -> ClientResult<ApiResponse<Value>> {
        self.post(
            &format!("/tags/{}/assign", tag_id),
            &AssignProducts {
                product_ids: product_ids.to_vec(),
            },
        )
        .await
    }

    pub async fn remove_product_from_tag(
        &self,
        tag_id: i64,
        item_id: &str,
    ) -> ClientResult<ApiResponse<Value>> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct RemoveBody<'a> {
            item_id: &'a str,
        }
        self.post(
            &format!("/tags/{}/remove-product", tag_id),
            &RemoveBody { item_id },
        )
        .await
    }

    /// Tags of one product
    pub async fn product_tags(&self, item_id: &str) -> ClientResult<ApiResponse<Vec<Tag>>> {
        self.get(&format!("/tags/product/{}", item_id)).await
    }

    /// Replace the tag set of one product
    pub async fn set_product_tags(
        &self,
        item_id: &str,
        tag_ids: &[i64],
    ) -> ClientResult<ApiResponse<Value>> {
        self.post(
            &format!("/tags/product/{}", item_id),
            &ProductTagsUpdate {
                tag_ids: tag_ids.to_vec(),
            },
        )
        .await
    }
}
