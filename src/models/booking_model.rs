use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookedDateRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    #[validate(custom(function = "crate::utils::validator_utils::validate_date_format"))]
    pub date: String,

    pub description: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedDateResponse {
    pub id: Uuid,
    pub date: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
