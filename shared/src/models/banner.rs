//! Banner Models
//!
//! Banners hang off a position (a named slot with fixed pixel
//! dimensions) and optionally a campaign (a named time window that
//! controls active dates centrally).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Banner entity
///
/// `sort_order` must be unique per position (server-enforced; a
/// duplicate comes back as a 409). `starts_at`/`ends_at` are optional
/// when `campaign_id` is set, since the campaign owns the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub id: i64,
    pub title: String,
    pub position_id: i64,
    pub campaign_id: Option<i64>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub sort_order: i32,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

/// Create banner payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerCreate {
    pub title: String,
    pub position_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<i64>,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    pub sort_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

/// Update banner payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BannerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

/// Banner position entity
///
/// The pixel dimensions double as the crop aspect ratio for banner
/// images targeted at this slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerPosition {
    pub id: i64,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub is_active: bool,
    /// Number of banners currently assigned to this slot
    #[serde(default)]
    pub banner_count: u64,
}

impl BannerPosition {
    /// Width over height; the crop lock for this slot
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Create position payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionCreate {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Update position payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Banner campaign entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerCampaign {
    pub id: i64,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_active: bool,
    #[serde(default)]
    pub banner_count: u64,
}

/// Create campaign payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignCreate {
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Update campaign payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio() {
        let position = BannerPosition {
            id: 1,
            name: "Home Hero".into(),
            width: 1200,
            height: 400,
            is_active: true,
            banner_count: 0,
        };
        assert_eq!(position.aspect_ratio(), 3.0);
    }

    #[test]
    fn test_banner_update_omits_unset_fields() {
        let update = BannerUpdate {
            sort_order: Some(2),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"sort_order":2}"#);
    }
}
