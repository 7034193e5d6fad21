use crate::config::AppState;
use crate::middleware::auth_middleware::bearer_token;
use crate::models::admin_model::{AdminCheckResponse, AdminLoginRequest, AdminLoginResponse};
use crate::services::admin_service::AdminService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::jwt_utils::JwtUtils;
use crate::utils::validated_wrapper::ValidatedJson;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::IntoResponse,
};

pub async fn admin_login_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AdminLoginRequest>,
) -> impl IntoResponse {
    match AdminService::verify_login(&state.db, &payload.username, &payload.password).await {
        Ok(admin) => match JwtUtils::generate_jwt(admin.public_id, &admin.username) {
            Ok((token, token_expires_at)) => ResponseBuilder::success(
                "AUTH_LOGIN_SUCCESS",
                "Login successful",
                AdminLoginResponse {
                    token,
                    token_expires_at,
                    admin: AdminService::map_to_info(&admin),
                },
            )
            .into_response(),
            Err(e) => ResponseBuilder::error::<()>(
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_ISSUE_ERR",
                &format!("Failed to issue token: {}", e),
            )
            .into_response(),
        },
        Err((status, code, message)) => {
            ResponseBuilder::error::<()>(status, code, &message).into_response()
        }
    }
}

/// Tokens are stateless; logging out is the client dropping its copy.
pub async fn admin_logout_handler() -> impl IntoResponse {
    ResponseBuilder::success("AUTH_LOGOUT_SUCCESS", "Logged out", ())
}

/// Session probe for the admin UI. Always answers 200; a missing or stale
/// token simply reads as not authenticated.
pub async fn admin_check_handler(State(state): State<AppState>, req: Request) -> impl IntoResponse {
    let unauthenticated = AdminCheckResponse {
        authenticated: false,
        admin: None,
    };

    let Ok(token) = bearer_token(&req) else {
        return ResponseBuilder::success("AUTH_CHECKED", "Success", unauthenticated)
            .into_response();
    };

    let Ok(token_data) = JwtUtils::validate_jwt(token) else {
        return ResponseBuilder::success("AUTH_CHECKED", "Success", unauthenticated)
            .into_response();
    };

    match AdminService::find_active_by_public_id(&state.db, token_data.claims.sub).await {
        Ok(Some(admin)) => ResponseBuilder::success(
            "AUTH_CHECKED",
            "Success",
            AdminCheckResponse {
                authenticated: true,
                admin: Some(AdminService::map_to_info(&admin)),
            },
        )
        .into_response(),
        _ => ResponseBuilder::success("AUTH_CHECKED", "Success", unauthenticated).into_response(),
    }
}
