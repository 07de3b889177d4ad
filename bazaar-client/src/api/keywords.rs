//! Category Keywords API

use serde_json::Value;
use shared::models::{CategoryKeyword, KeywordBulkCreate, KeywordCreate, KeywordQuery, KeywordUpdate};
use shared::response::ApiResponse;

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    pub async fn category_keywords(
        &self,
        query: &KeywordQuery,
    ) -> ClientResult<ApiResponse<Vec<CategoryKeyword>>> {
        let pairs = query.query_pairs();
        self.get_query("/category-keywords", &pairs).await
    }

    pub async fn keywords_for_category(
        &self,
        category_id: i64,
    ) -> ClientResult<ApiResponse<Vec<CategoryKeyword>>> {
        self.get(&format!("/category-keywords/category/{}", category_id))
            .await
    }

    pub async fn create_keyword(
        &self,
        keyword: &KeywordCreate,
    ) -> ClientResult<ApiResponse<CategoryKeyword>> {
        self.post("/category-keywords", keyword).await
    }

    pub async fn update_keyword(
        &self,
        id: i64,
        update: &KeywordUpdate,
    ) -> ClientResult<ApiResponse<CategoryKeyword>> {
        self.put(&format!("/category-keywords/{}", id), update).await
    }

    pub async fn delete_keyword(&self, id: i64) -> ClientResult<ApiResponse<Value>> {
        self.delete(&format!("/category-keywords/{}", id)).await
    }

    pub async fn bulk_create_keywords(
        &self,
        bulk: &KeywordBulkCreate,
    ) -> ClientResult<ApiResponse<Vec<CategoryKeyword>>> {
        self.post("/category-keywords/bulk", bulk).await
    }
}
