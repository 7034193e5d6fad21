use crate::config::AppState;
use crate::handlers::admin_handler::{
    admin_check_handler, admin_login_handler, admin_logout_handler,
};
use crate::handlers::booking_handler::{create_booked_date_handler, delete_booked_date_handler};
use crate::handlers::portfolio_handler::{
    create_portfolio_handler, delete_portfolio_handler, list_all_portfolio_handler,
    update_portfolio_handler,
};
use crate::handlers::upload_handler::{upload_multiple_handler, upload_single_handler};
use crate::middleware::auth_middleware::admin_auth_middleware;
use axum::extract::DefaultBodyLimit;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

const UPLOAD_BODY_LIMIT: usize = 200 * 1024 * 1024;

pub fn admin_routes(state: AppState) -> Router<AppState> {
    let guarded = Router::new()
        .nest(
            "/portfolio",
            Router::new()
                .route("/", get(list_all_portfolio_handler).post(create_portfolio_handler))
                .route(
                    "/{id}",
                    put(update_portfolio_handler).delete(delete_portfolio_handler),
                ),
        )
        .nest(
            "/booked-dates",
            Router::new()
                .route("/", post(create_booked_date_handler))
                .route("/{id}", delete(delete_booked_date_handler)),
        )
        .route("/upload", post(upload_single_handler))
        .route("/upload-multiple", post(upload_multiple_handler))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .layer(middleware::from_fn_with_state(state, admin_auth_middleware));

    Router::new()
        .route("/login", post(admin_login_handler))
        .route("/logout", post(admin_logout_handler))
        .route("/check", get(admin_check_handler))
        .merge(guarded)
}
