use crate::config::AppState;
use crate::handlers::ping_handler;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod admin_route;
pub mod booking_route;
pub mod contact_route;
pub mod portfolio_route;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/contact", contact_route::contact_routes(state.clone()))
        .nest(
            "/api/contact-submissions",
            contact_route::submission_routes(state.clone()),
        )
        .nest("/api/portfolio", portfolio_route::public_routes())
        .nest("/api/booked-dates", booking_route::public_routes())
        .nest("/api/admin", admin_route::admin_routes(state))
        // Keep-alive ping endpoint to prevent server sleep
        .route("/api/ping", get(ping_handler))
        .layer(cors)
}
