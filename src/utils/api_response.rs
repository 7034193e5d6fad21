use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Uniform JSON envelope: machine code + human message, optional payload.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Serialize)]
pub struct ValidationErrorDetail {
    pub field: String,
    pub title: String,
    pub message: String,
}

// Carries the HTTP status together with the body
pub struct ApiResponseResult<T>(pub StatusCode, pub ApiResponse<T>);

impl<T> IntoResponse for ApiResponseResult<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

pub struct ResponseBuilder;

impl ResponseBuilder {
    pub fn success<T: Serialize>(code: &str, message: &str, data: T) -> ApiResponseResult<T> {
        Self::build(StatusCode::OK, "success", code, message, Some(data))
    }

    pub fn created<T: Serialize>(code: &str, message: &str, data: T) -> ApiResponseResult<T> {
        Self::build(StatusCode::CREATED, "success", code, message, Some(data))
    }

    pub fn error<T: Serialize>(
        status_code: StatusCode,
        code: &str,
        message: &str,
    ) -> ApiResponseResult<T> {
        Self::build(status_code, "error", code, message, None)
    }

    /// Validation failures ship the per-field details as payload.
    pub fn validation_failure(
        errors: Vec<ValidationErrorDetail>,
    ) -> ApiResponseResult<Vec<ValidationErrorDetail>> {
        Self::build(
            StatusCode::BAD_REQUEST,
            "error",
            "VALIDATION_ERROR",
            "Невірні дані форми",
            Some(errors),
        )
    }

    fn build<T: Serialize>(
        status_code: StatusCode,
        status: &str,
        code: &str,
        message: &str,
        data: Option<T>,
    ) -> ApiResponseResult<T> {
        ApiResponseResult(
            status_code,
            ApiResponse {
                status: status.to_string(),
                code: code.to_string(),
                message: message.to_string(),
                data,
            },
        )
    }
}
