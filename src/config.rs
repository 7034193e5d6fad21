use sea_orm::DatabaseConnection;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expires_in: i64,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub catbox_api_url: String,
    // Public base URL of this deployment; keep-alive is disabled without it
    pub public_url: Option<String>,
    pub keep_alive_interval_minutes: u64,
    pub admin_username: String,
    pub admin_password: String,
    pub admin_email: String,
}

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub telegram_service: crate::services::telegram_service::TelegramService,
    pub catbox_service: crate::services::catbox_service::CatboxService,
    pub rate_limiter: std::sync::Arc<crate::middleware::rate_limiter::RateLimiter>,
}

impl Config {
    pub fn init() -> Config {
        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .expect("PORT must be a number");

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in .env");
        let jwt_expires_in = env::var("JWT_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<i64>()
            .expect("JWT_EXPIRATION_MINUTES must be a number");

        let telegram_bot_token =
            env::var("TELEGRAM_BOT_TOKEN").expect("TELEGRAM_BOT_TOKEN must be set in .env");
        let telegram_chat_id =
            env::var("TELEGRAM_CHAT_ID").expect("TELEGRAM_CHAT_ID must be set in .env");

        let catbox_api_url = env::var("CATBOX_API_URL")
            .unwrap_or_else(|_| "https://catbox.moe/user/api.php".to_string());

        let public_url = env::var("PUBLIC_URL").ok().filter(|s| !s.is_empty());
        let keep_alive_interval_minutes = env::var("KEEP_ALIVE_INTERVAL_MINUTES")
            .unwrap_or_else(|_| "4".to_string())
            .parse::<u64>()
            .expect("KEEP_ALIVE_INTERVAL_MINUTES must be a number");

        let admin_username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
        let admin_email =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@vesilfilm.studio".to_string());

        Config {
            server_host,
            server_port,
            database_url,
            jwt_secret,
            jwt_expires_in,
            telegram_bot_token,
            telegram_chat_id,
            catbox_api_url,
            public_url,
            keep_alive_interval_minutes,
            admin_username,
            admin_password,
            admin_email,
        }
    }
}
