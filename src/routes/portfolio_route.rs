use crate::config::AppState;
use crate::handlers::portfolio_handler::list_published_portfolio_handler;
use axum::{routing::get, Router};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(list_published_portfolio_handler))
}
