use crate::config::AppState;
use crate::handlers::contact_handler::{list_submissions_handler, submit_contact_handler};
use crate::middleware::auth_middleware::admin_auth_middleware;
use crate::middleware::rate_limiter::rate_limit_middleware;
use axum::extract::DefaultBodyLimit;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

// Attachments may be large; catbox accepts up to 200MB per file
const CONTACT_BODY_LIMIT: usize = 200 * 1024 * 1024;

pub fn contact_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(submit_contact_handler))
        .layer(DefaultBodyLimit::max(CONTACT_BODY_LIMIT))
        .layer(middleware::from_fn_with_state(state, rate_limit_middleware))
}

pub fn submission_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_submissions_handler))
        .layer(middleware::from_fn_with_state(state, admin_auth_middleware))
}
