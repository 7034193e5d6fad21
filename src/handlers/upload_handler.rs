use crate::config::AppState;
use crate::models::upload_model::{MultiUploadResponse, SingleUploadResponse};
use crate::services::upload_service::{
    run_upload_sequence, ImageHost, UploadItem, ITEM_COOLDOWN, MAX_BATCH_SIZE,
};
use crate::utils::api_response::ResponseBuilder;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};

pub async fn upload_single_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        if name != "image" {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        if !mime_type.starts_with("image/") {
            return ResponseBuilder::error::<()>(
                StatusCode::BAD_REQUEST,
                "MEDIA_INVALID_TYPE",
                "Only image files are allowed",
            )
            .into_response();
        }

        let data = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                return ResponseBuilder::error::<()>(
                    StatusCode::BAD_REQUEST,
                    "UPLOAD_ERR",
                    &e.to_string(),
                )
                .into_response();
            }
        };

        let size = data.len();
        let file_size_mb = size as f64 / (1024.0 * 1024.0);
        tracing::info!("received upload: {} ({:.2}MB)", original_name, file_size_mb);

        return match state.catbox_service.upload(data, &original_name).await {
            Ok(url) => ResponseBuilder::success(
                "UPLOAD_SUCCESS",
                "Upload successful",
                SingleUploadResponse {
                    url,
                    original_name,
                    size,
                    file_size_mb: format!("{:.2}", file_size_mb),
                },
            )
            .into_response(),
            Err(e) => ResponseBuilder::error::<()>(
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_UPLOAD_ERR",
                &format!("Image upload failed: {}", e),
            )
            .into_response(),
        };
    }

    ResponseBuilder::error::<()>(StatusCode::BAD_REQUEST, "MISSING_FILE", "No file uploaded")
        .into_response()
}

/// Batch upload for the admin gallery editor. Files go to the host one at a
/// time; per-file failures are reported next to the successes.
pub async fn upload_multiple_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut items: Vec<UploadItem> = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        if name != "images" {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        if !mime_type.starts_with("image/") {
            return ResponseBuilder::error::<()>(
                StatusCode::BAD_REQUEST,
                "MEDIA_INVALID_TYPE",
                "Only image files are allowed",
            )
            .into_response();
        }

        if items.len() >= MAX_BATCH_SIZE {
            return ResponseBuilder::error::<()>(
                StatusCode::BAD_REQUEST,
                "BATCH_TOO_LARGE",
                &format!("At most {} files per batch", MAX_BATCH_SIZE),
            )
            .into_response();
        }

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                return ResponseBuilder::error::<()>(
                    StatusCode::BAD_REQUEST,
                    "UPLOAD_ERR",
                    &e.to_string(),
                )
                .into_response();
            }
        };

        items.push(UploadItem {
            bytes,
            file_name,
            mime_type,
        });
    }

    if items.is_empty() {
        return ResponseBuilder::error::<()>(
            StatusCode::BAD_REQUEST,
            "MISSING_FILE",
            "No files uploaded",
        )
        .into_response();
    }

    let report = run_upload_sequence(items, &state.catbox_service, ITEM_COOLDOWN).await;

    ResponseBuilder::success(
        "UPLOAD_BATCH_DONE",
        "Batch processed",
        MultiUploadResponse {
            success: !report.succeeded.is_empty(),
            results: report.succeeded,
            errors: report.failed,
            summary: report.summary,
        },
    )
    .into_response()
}
