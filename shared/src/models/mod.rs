//! Entity models
//!
//! One module per backend resource. Each follows the same triple:
//! entity struct, create payload, update payload.

pub mod admin;
pub mod banner;
pub mod category;
pub mod keyword;
pub mod product;
pub mod role;
pub mod settings;
pub mod tag;
pub mod upload;

use serde::{Deserialize, Serialize};

/// Activation toggle payload, shared by every `PATCH .../status`
/// endpoint that takes `{is_active}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub is_active: bool,
}

pub use admin::{AdminCreate, AdminQuery, AdminStatus, AdminUpdate, AdminUser, DashboardStats};
pub use banner::{
    Banner, BannerCampaign, BannerCreate, BannerPosition, BannerUpdate, CampaignCreate,
    CampaignUpdate, PositionCreate, PositionUpdate,
};
pub use category::{AssignProducts, Category, CategoryCreate, CategoryUpdate, MoveProducts};
pub use keyword::{CategoryKeyword, KeywordBulkCreate, KeywordCreate, KeywordQuery, KeywordSpec, KeywordUpdate};
pub use product::{
    Product, ProductSave, ProductSearchQuery, ProductStatus, SavedProductQuery, SortOrder,
};
pub use role::{Permission, Role, RoleCreate, RolePermissionsUpdate, RoleUpdate, SUPER_ADMIN_ROLE_ID};
pub use settings::{SettingsUpdate, SiteSettings, SocialCreate, SocialLink, SocialUpdate};
pub use tag::{ProductTagsUpdate, Tag, TagCreate, TagUpdate};
pub use upload::{ImageUsage, UploadedImage};
