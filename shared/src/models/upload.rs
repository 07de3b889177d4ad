//! Uploaded Image Models

use serde::{Deserialize, Serialize};

/// Uploaded image descriptor returned by the upload endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedImage {
    pub filename: String,
    pub url: String,
    #[serde(default)]
    pub size: u64,
    pub folder: Option<String>,
}

/// Usage check for a stored banner image
/// (`GET /uploads/banners/{filename}/check`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUsage {
    pub in_use: bool,
    /// Banner titles currently referencing the file
    #[serde(default)]
    pub used_by: Vec<String>,
}
