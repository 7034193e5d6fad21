use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

fn default_published() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolioItemRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub category_name: String,

    pub category_preview: Option<String>,
    pub photo_thumbnail: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub video_thumbnail: Option<String>,
    pub video_url: Option<String>,

    #[serde(default = "default_published")]
    pub is_published: bool,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePortfolioItemRequest {
    pub category_name: Option<String>,
    pub category_preview: Option<String>,
    pub photo_thumbnail: Option<String>,
    pub photos: Option<Vec<String>>,
    pub video_thumbnail: Option<String>,
    pub video_url: Option<String>,
    pub is_published: Option<bool>,
    pub order_index: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItemResponse {
    pub id: Uuid,
    pub category_name: String,
    pub category_preview: Option<String>,
    pub photo_thumbnail: Option<String>,
    pub photos: Vec<String>,
    pub video_thumbnail: Option<String>,
    pub video_url: Option<String>,
    pub is_published: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
