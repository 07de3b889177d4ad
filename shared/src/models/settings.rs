//! Site Settings and Social Link Models

use serde::{Deserialize, Serialize};

/// Site settings singleton
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    pub id: i64,
    pub website_name: String,
    pub logo_url: Option<String>,
    pub maintenance_mode: bool,
}

/// Update settings payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
}

/// Social media link entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: i64,
    pub name: String,
    pub icon_url: String,
    pub url: String,
    pub is_active: bool,
    pub sort_order: i32,
}

/// Create social link payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialCreate {
    pub name: String,
    pub icon_url: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// Update social link payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}
