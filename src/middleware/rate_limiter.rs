use crate::config::AppState;
use crate::utils::api_response::ResponseBuilder;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Sliding-window limiter keyed by client IP. Guards the public contact
/// funnel against form spam.
pub struct RateLimiter {
    requests: RwLock<HashMap<String, Vec<Instant>>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            requests: RwLock::new(HashMap::new()),
            max_requests,
            window,
        }
    }

    pub async fn check_rate_limit(&self, identifier: &str) -> bool {
        let mut requests = self.requests.write().await;
        let now = Instant::now();

        // Lazy cleanup: stale timestamps go when the key is touched
        let cutoff = now.checked_sub(self.window).unwrap_or(now);

        let entry = requests.entry(identifier.to_string()).or_default();
        entry.retain(|&timestamp| timestamp > cutoff);

        if entry.len() >= self.max_requests {
            return false;
        }

        entry.push(now);
        true
    }
}

pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    // Behind a proxy the client address lives in x-forwarded-for
    let identifier = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.split(',').next().unwrap_or(s).trim())
        .unwrap_or("unknown")
        .to_string();

    if !state.rate_limiter.check_rate_limit(&identifier).await {
        return ResponseBuilder::error::<()>(
            StatusCode::TOO_MANY_REQUESTS,
            "RATE_LIMIT_EXCEEDED",
            "Too many requests. Please try again later.",
        )
        .into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn limit_applies_per_identifier() {
        let limiter = RateLimiter::new(2, Duration::from_secs(60));

        assert!(limiter.check_rate_limit("1.2.3.4").await);
        assert!(limiter.check_rate_limit("1.2.3.4").await);
        assert!(!limiter.check_rate_limit("1.2.3.4").await);
        // A different client is unaffected
        assert!(limiter.check_rate_limit("5.6.7.8").await);
    }
}
