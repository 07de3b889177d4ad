//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// `product_count` drives the client-side deactivation guard; the
/// server enforces the same rule authoritatively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    #[serde(default)]
    pub product_count: u64,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: String,
}

/// Bulk assignment payload (`POST /categories/{id}/assign`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignProducts {
    pub product_ids: Vec<String>,
}

/// Bulk move payload (`POST /categories/{id}/move-products`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveProducts {
    pub target_category_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_payload_field_name() {
        let payload = AssignProducts {
            product_ids: vec!["100".into(), "200".into()],
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"productIds\""));
    }

    #[test]
    fn test_product_count_defaults_to_zero() {
        let json = r#"{"id":1,"name":"Shoes","is_active":true}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.product_count, 0);
    }
}
