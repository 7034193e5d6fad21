use crate::config::Config;
use reqwest::Client;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Pings the deployment's own /api/ping on an interval so a free-tier host
/// does not put the process to sleep. Explicitly constructed and started from
/// main; `stop` aborts the background task.
pub struct KeepAliveService {
    client: Client,
    target_url: Option<String>,
    interval: Duration,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl KeepAliveService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            target_url: config
                .public_url
                .as_ref()
                .map(|base| format!("{}/api/ping", base.trim_end_matches('/'))),
            interval: Duration::from_secs(config.keep_alive_interval_minutes * 60),
            handle: Mutex::new(None),
        }
    }

    pub fn start(&self) {
        let Some(url) = self.target_url.clone() else {
            tracing::info!("keep-alive disabled: PUBLIC_URL is not set");
            return;
        };

        let mut guard = self.handle.lock().expect("keep-alive lock poisoned");
        if guard.is_some() {
            return;
        }

        tracing::info!(
            "starting keep-alive ping every {}s against {}",
            self.interval.as_secs(),
            url
        );

        let client = self.client.clone();
        let interval = self.interval;
        *guard = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick fires immediately; ping right away like the ticker
            loop {
                ticker.tick().await;
                match client.get(&url).send().await {
                    Ok(response) if response.status().is_success() => {
                        tracing::debug!("keep-alive ping successful");
                    }
                    Ok(response) => {
                        tracing::warn!("keep-alive ping failed: {}", response.status());
                    }
                    Err(e) => {
                        tracing::warn!("keep-alive ping error: {}", e);
                    }
                }
            }
        }));
    }

    pub fn stop(&self) {
        let mut guard = self.handle.lock().expect("keep-alive lock poisoned");
        if let Some(handle) = guard.take() {
            handle.abort();
            tracing::info!("keep-alive stopped");
        }
    }
}

impl Drop for KeepAliveService {
    fn drop(&mut self) {
        self.stop();
    }
}
