use crate::config::AppState;
use crate::handlers::booking_handler::list_booked_dates_handler;
use axum::{routing::get, Router};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(list_booked_dates_handler))
}
