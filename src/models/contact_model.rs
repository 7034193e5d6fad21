use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmissionRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub bride_name: String,

    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub groom_name: String,

    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    #[validate(custom(function = "crate::utils::validator_utils::validate_digits"))]
    pub phone: String,

    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    #[validate(email(message = "Невірний формат email"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub wedding_date: String,

    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub location: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Оберіть послуги"))]
    pub services: Vec<String>,

    pub additional_info: Option<String>,

    #[serde(default)]
    pub attachments: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmissionCreated {
    pub id: Uuid,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub bride_name: String,
    pub groom_name: String,
    pub phone: String,
    pub email: String,
    pub wedding_date: String,
    pub location: String,
    pub services: Vec<String>,
    pub additional_info: Option<String>,
    pub attachments: Vec<String>,
    pub total_price: i32,
    pub created_at: DateTime<Utc>,
}
