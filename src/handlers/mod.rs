pub mod admin_handler;
pub mod booking_handler;
pub mod contact_handler;
pub mod portfolio_handler;
pub mod upload_handler;

use crate::utils::api_response::ResponseBuilder;
use axum::response::IntoResponse;
use chrono::Utc;
use std::sync::OnceLock;
use std::time::Instant;

/// Set once from main so /api/ping can report uptime.
pub static SERVER_START: OnceLock<Instant> = OnceLock::new();

/// Keep-alive target: cheap, unauthenticated, answers with uptime.
pub async fn ping_handler() -> impl IntoResponse {
    let uptime = SERVER_START
        .get()
        .map(|start| start.elapsed().as_secs())
        .unwrap_or(0);

    ResponseBuilder::success(
        "PING_OK",
        "Server is alive",
        serde_json::json!({
            "status": "alive",
            "timestamp": Utc::now().to_rfc3339(),
            "uptime": uptime,
        }),
    )
}
