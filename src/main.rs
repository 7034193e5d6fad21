mod config;
mod entities;
mod handlers;
mod middleware;
mod models;
mod pricing;
mod routes;
mod seeders;
mod services;
mod utils;

use config::{AppState, Config};
use dotenvy::dotenv;
use sea_orm::Database;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let cfg = Config::init();
    println!("🚀 Starting Vesilfilm Backend...");

    // 1. Database Connection
    println!("📡 Connecting to Database...");
    let db = Database::connect(&cfg.database_url)
        .await
        .expect("🔥 Failed to connect to Database!");
    println!("✅ Database Connected!");

    // 2. Database Seeding
    println!("🌱 Running Seeders...");
    if let Err(e) = seeders::run_seeders(&db, &cfg).await {
        tracing::error!("❌ Seeding failed: {}", e);
    } else {
        println!("✅ Seeding Successful!");
    }

    // 3. Setup Services
    let telegram_service = services::telegram_service::TelegramService::new(&cfg);
    let catbox_service = services::catbox_service::CatboxService::new(&cfg);
    let keep_alive = services::keep_alive_service::KeepAliveService::new(&cfg);

    // 4. Build App State
    let rate_limiter = Arc::new(middleware::rate_limiter::RateLimiter::new(
        20,
        Duration::from_secs(60),
    ));

    let state = AppState {
        db,
        telegram_service,
        catbox_service,
        rate_limiter,
    };

    // 5. Background lifecycle
    handlers::SERVER_START.set(Instant::now()).ok();
    keep_alive.start();

    // 6. Initialize Router
    let app = routes::create_routes(state.clone()).with_state(state);

    // 7. Start Server
    let addr_str = format!("{}:{}", cfg.server_host, cfg.server_port);
    let addr: SocketAddr = addr_str.parse().expect("Invalid address");

    println!("🎯 Server ready! Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();

    keep_alive.stop();
}
