use crate::services::upload_service::{UploadFailure, UploadSuccess, UploadSummary};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleUploadResponse {
    pub url: String,
    pub original_name: String,
    pub size: usize,
    pub file_size_mb: String,
}

#[derive(Serialize)]
pub struct MultiUploadResponse {
    pub success: bool,
    pub results: Vec<UploadSuccess>,
    pub errors: Vec<UploadFailure>,
    pub summary: UploadSummary,
}
