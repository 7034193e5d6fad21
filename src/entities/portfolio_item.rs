use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_serializing)]
    pub id: i64,
    #[sea_orm(unique, indexed)]
    pub public_id: Uuid,

    pub category_name: String,
    // Main preview image for the whole category block
    pub category_preview: Option<String>,
    pub photo_thumbnail: Option<String>,
    pub photos: Vec<String>,
    pub video_thumbnail: Option<String>,
    pub video_url: Option<String>,
    pub is_published: bool,
    pub order_index: i32,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
