use crate::config::AppState;
use crate::models::admin_model::CurrentAdmin;
use crate::services::admin_service::AdminService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::jwt_utils::JwtUtils;
use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::errors::ErrorKind;

/// Bearer-token guard for the admin area. Valid token + active admin account
/// required; the admin is attached to the request as an extension.
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> std::result::Result<Response, StatusCode> {
    let token = match bearer_token(&req) {
        Ok(token) => token,
        Err(response) => return Ok(response),
    };

    let token_data = match JwtUtils::validate_jwt(token) {
        Ok(data) => data,
        Err(e) => {
            let (code, message) = match e.kind() {
                ErrorKind::ExpiredSignature => ("TOKEN_EXPIRED", "Token has expired"),
                ErrorKind::InvalidToken => ("TOKEN_INVALID", "Token is invalid"),
                ErrorKind::InvalidSignature => ("TOKEN_BAD_SIGNATURE", "Invalid token signature"),
                _ => ("AUTH_FAILED", "Authentication failed"),
            };

            return Ok(
                ResponseBuilder::error::<()>(StatusCode::UNAUTHORIZED, code, message)
                    .into_response(),
            );
        }
    };

    let claims = token_data.claims;

    // Token may outlive the account; re-check the admin row
    let admin = match AdminService::find_active_by_public_id(&state.db, claims.sub).await {
        Ok(Some(admin)) => admin,
        Ok(None) => {
            return Ok(ResponseBuilder::error::<()>(
                StatusCode::UNAUTHORIZED,
                "ADMIN_INACTIVE",
                "Admin account is missing or deactivated",
            )
            .into_response());
        }
        Err((status, code, message)) => {
            return Ok(ResponseBuilder::error::<()>(status, code, &message).into_response());
        }
    };

    req.extensions_mut().insert(CurrentAdmin {
        id: admin.public_id,
        username: admin.username,
    });

    Ok(next.run(req).await)
}

pub fn bearer_token(req: &Request<Body>) -> Result<&str, Response> {
    let auth_header = match req.headers().get(header::AUTHORIZATION) {
        Some(header) => header,
        None => {
            return Err(ResponseBuilder::error::<()>(
                StatusCode::UNAUTHORIZED,
                "AUTH_MISSING",
                "Authorization header is missing",
            )
            .into_response());
        }
    };

    let auth_str = match auth_header.to_str() {
        Ok(s) => s,
        Err(_) => {
            return Err(ResponseBuilder::error::<()>(
                StatusCode::UNAUTHORIZED,
                "AUTH_INVALID_FORMAT",
                "Invalid Authorization header format",
            )
            .into_response());
        }
    };

    match auth_str.strip_prefix("Bearer ") {
        Some(token) => Ok(token),
        None => Err(ResponseBuilder::error::<()>(
            StatusCode::UNAUTHORIZED,
            "AUTH_INVALID_SCHEME",
            "Invalid token format. Missing 'Bearer ' prefix",
        )
        .into_response()),
    }
}
