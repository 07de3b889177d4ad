//! Tag Model

use serde::{Deserialize, Serialize};

/// Tag entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    #[serde(default)]
    pub product_count: u64,
}

/// Create tag payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCreate {
    pub name: String,
}

/// Update tag payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagUpdate {
    pub name: String,
}

/// Replace the tag set of one product (`POST /tags/product/{item_id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTagsUpdate {
    pub tag_ids: Vec<i64>,
}
