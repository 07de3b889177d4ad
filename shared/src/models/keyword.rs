//! Category Keyword Model
//!
//! Keywords feed the backend's category-matching score; high-priority
//! keywords weigh heavier. The client only does CRUD on them.

use serde::{Deserialize, Serialize};

/// Category keyword entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryKeyword {
    pub id: i64,
    pub category_id: i64,
    pub keyword: String,
    #[serde(default)]
    pub is_high_priority: bool,
}

/// Create keyword payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCreate {
    pub category_id: i64,
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_high_priority: Option<bool>,
}

/// Update keyword payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordUpdate {
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_high_priority: Option<bool>,
}

/// One keyword in a bulk create; the backend accepts both a bare
/// string and the detailed object form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordSpec {
    Plain(String),
    Detailed {
        keyword: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_high_priority: Option<bool>,
    },
}

/// Bulk create payload (`POST /category-keywords/bulk`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordBulkCreate {
    pub category_id: i64,
    pub keywords: Vec<KeywordSpec>,
}

/// Keyword listing filter
#[derive(Debug, Clone, Default)]
pub struct KeywordQuery {
    /// `Some(0)` means "all categories" and is omitted from the query
    pub category_id: Option<i64>,
    pub search: Option<String>,
}

impl KeywordQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        match self.category_id {
            Some(id) if id != 0 => pairs.push(("category_id", id.to_string())),
            _ => {}
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}
