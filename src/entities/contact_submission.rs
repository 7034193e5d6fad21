use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_serializing)]
    pub id: i64,
    #[sea_orm(unique, indexed)]
    pub public_id: Uuid,

    pub bride_name: String,
    pub groom_name: String,
    pub phone: String,
    pub email: String,
    pub wedding_date: String,
    pub location: String,
    pub services: Vec<String>,
    pub additional_info: Option<String>,
    pub attachments: Vec<String>,
    // Server-side total derived from the selected services
    pub total_price: i32,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
