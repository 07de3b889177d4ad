//! Product Model

use serde::{Deserialize, Serialize};

/// Product lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
    Pending,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Pending => "pending",
        }
    }
}

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Product entity
///
/// `item_id` is the marketplace identifier; `id` is the backend row
/// id. Uniqueness of `item_id` is enforced server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>,
    pub item_id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub price: f64,
    pub commission_rate: f64,
    pub commission_amount: Option<f64>,
    pub rating_star: Option<f64>,
    pub category_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: ProductStatus,
    #[serde(default)]
    pub is_flash_sale: bool,
    /// Outbound tracked URL for commission attribution (opaque)
    pub offer_link: Option<String>,
}

/// Save-product payload (`POST /products/save`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSave {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub commission_rate: f64,
    pub image_url: Option<String>,
    pub offer_link: Option<String>,
    pub category_id: Option<i64>,
    pub status: Option<ProductStatus>,
}

/// Saved-products listing query (`GET /products/saved`)
#[derive(Debug, Clone, Default)]
pub struct SavedProductQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<ProductStatus>,
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub tag_id: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl SavedProductQuery {
    /// Key/value pairs in the exact parameter names the backend expects
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("category_id", category_id.to_string()));
        }
        if let Some(tag_id) = self.tag_id {
            pairs.push(("tag_id", tag_id.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sort_by", sort_by.clone()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sort_order", sort_order.as_str().to_string()));
        }
        pairs
    }
}

/// Marketplace search query (`GET /products/search`)
///
/// Note the camelCase parameter names; this endpoint predates the
/// snake_case convention of the saved listing.
#[derive(Debug, Clone, Default)]
pub struct ProductSearchQuery {
    pub page: Option<u32>,
    pub search: Option<String>,
    pub commission_rate: Option<f64>,
    pub rating_star: Option<f64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl ProductSearchQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(rate) = self.commission_rate {
            pairs.push(("commissionRate", rate.to_string()));
        }
        if let Some(star) = self.rating_star {
            pairs.push(("ratingStar", star.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sortOrder", sort_order.as_str().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProductStatus::Pending).unwrap(),
            "\"pending\""
        );
        let parsed: ProductStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(parsed, ProductStatus::Active);
    }

    #[test]
    fn test_saved_query_pairs() {
        let query = SavedProductQuery {
            page: Some(2),
            status: Some(ProductStatus::Active),
            category_id: Some(7),
            sort_by: Some("price".into()),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("page", "2".into())));
        assert!(pairs.contains(&("category_id", "7".into())));
        assert!(pairs.contains(&("sort_order", "desc".into())));
        assert!(!pairs.iter().any(|(k, _)| *k == "tag_id"));
    }

    #[test]
    fn test_search_query_uses_camel_case_keys() {
        let query = ProductSearchQuery {
            commission_rate: Some(5.0),
            rating_star: Some(4.5),
            ..Default::default()
        };
        let pairs = query.query_pairs();
        assert!(pairs.iter().any(|(k, _)| *k == "commissionRate"));
        assert!(pairs.iter().any(|(k, _)| *k == "ratingStar"));
    }
}
