use crate::config::AppState;
use crate::models::contact_model::{ContactSubmissionCreated, ContactSubmissionRequest};
use crate::services::contact_service::ContactService;
use crate::services::upload_service::UploadItem;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::map_validation_errors;
use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

/// Public contact-form endpoint. The form posts multipart when files are
/// attached and plain JSON otherwise; both land here.
pub async fn submit_contact_handler(
    State(state): State<AppState>,
    req: Request,
) -> impl IntoResponse {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let (payload, files) = if content_type.starts_with("multipart/form-data") {
        let multipart = match Multipart::from_request(req, &state).await {
            Ok(mp) => mp,
            Err(e) => {
                return ResponseBuilder::error::<()>(
                    StatusCode::BAD_REQUEST,
                    "INVALID_MULTIPART",
                    &e.to_string(),
                )
                .into_response();
            }
        };
        match parse_contact_multipart(multipart).await {
            Ok(parsed) => parsed,
            Err(response) => return response,
        }
    } else {
        match Json::<ContactSubmissionRequest>::from_request(req, &state).await {
            Ok(Json(payload)) => (payload, Vec::new()),
            Err(e) => {
                let message = format!("Invalid JSON format: {}", e.body_text());
                return ResponseBuilder::error::<()>(
                    StatusCode::BAD_REQUEST,
                    "INVALID_JSON",
                    &message,
                )
                .into_response();
            }
        }
    };

    if let Err(e) = payload.validate() {
        return ResponseBuilder::validation_failure(map_validation_errors(e)).into_response();
    }

    match ContactService::create_submission(&state.db, payload).await {
        Ok((saved, total)) => {
            // The response never waits on Telegram; delivery failures only log
            let message = ContactService::build_notification(&saved, total);
            let telegram = state.telegram_service.clone();
            tokio::spawn(async move {
                telegram.notify_submission(&message, files).await;
            });

            ResponseBuilder::created(
                "CONTACT_SUBMITTED",
                "Заявка відправлена",
                ContactSubmissionCreated {
                    id: saved.public_id,
                },
            )
            .into_response()
        }
        Err((status, code, message)) => {
            ResponseBuilder::error::<()>(status, code, &message).into_response()
        }
    }
}

pub async fn list_submissions_handler(State(state): State<AppState>) -> impl IntoResponse {
    match ContactService::list_submissions(&state.db).await {
        Ok(submissions) => {
            ResponseBuilder::success("SUBMISSIONS_FETCHED", "Success", submissions).into_response()
        }
        Err((status, code, message)) => {
            ResponseBuilder::error::<()>(status, code, &message).into_response()
        }
    }
}

/// Collects form fields and attachments from one multipart body. Fields keep
/// the client's camelCase names; any part carrying a file name is an
/// attachment regardless of its field name.
async fn parse_contact_multipart(
    mut multipart: Multipart,
) -> Result<(ContactSubmissionRequest, Vec<UploadItem>), Response> {
    let mut payload = ContactSubmissionRequest {
        bride_name: String::new(),
        groom_name: String::new(),
        phone: String::new(),
        email: String::new(),
        wedding_date: String::new(),
        location: String::new(),
        services: Vec::new(),
        additional_info: None,
        attachments: Vec::new(),
    };
    let mut files = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();

        if let Some(file_name) = field.file_name() {
            let file_name = file_name.to_string();
            let mime_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();

            let bytes = match field.bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    return Err(ResponseBuilder::error::<()>(
                        StatusCode::BAD_REQUEST,
                        "UPLOAD_ERR",
                        &e.to_string(),
                    )
                    .into_response());
                }
            };

            payload.attachments.push(file_name.clone());
            files.push(UploadItem {
                bytes,
                file_name,
                mime_type,
            });
            continue;
        }

        let value = match field.text().await {
            Ok(text) => text,
            Err(e) => {
                return Err(ResponseBuilder::error::<()>(
                    StatusCode::BAD_REQUEST,
                    "FORM_ERR",
                    &e.to_string(),
                )
                .into_response());
            }
        };

        match name.as_str() {
            "brideName" => payload.bride_name = value,
            "groomName" => payload.groom_name = value,
            "phone" => payload.phone = value,
            "email" => payload.email = value,
            "weddingDate" => payload.wedding_date = value,
            "location" => payload.location = value,
            "services" => {
                payload.services = serde_json::from_str(&value).unwrap_or_default();
            }
            "additionalInfo" => {
                payload.additional_info = Some(value).filter(|s| !s.is_empty());
            }
            // totalPrice / selectedPackage / selectedOptions are advisory
            // client fields; the total is recomputed from `services`
            _ => {}
        }
    }

    Ok((payload, files))
}
