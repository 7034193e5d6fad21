use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Pause between items. The host this runs on is memory-constrained, so one
/// buffer is in flight at a time and the allocator gets a breather between
/// uploads.
pub const ITEM_COOLDOWN: Duration = Duration::from_millis(500);

/// Most files accepted in one batch.
pub const MAX_BATCH_SIZE: usize = 5;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("host rejected upload: HTTP {0}")]
    HttpStatus(u16),

    #[error("unexpected response from host: {0}")]
    InvalidResponse(String),
}

/// One file taken from a multipart request. Consumed exactly once by the
/// sequencer; the byte buffer is dropped as soon as its outcome is recorded.
pub struct UploadItem {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

/// Seam to the external image host, so the sequencer can be exercised
/// without the network.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> Result<String, UploadError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSuccess {
    pub index: usize,
    pub original_name: String,
    pub url: String,
    pub size: usize,
    pub file_size_mb: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFailure {
    pub index: usize,
    pub original_name: String,
    pub error: String,
}

#[derive(Serialize)]
pub struct UploadSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Serialize)]
pub struct UploadReport {
    pub succeeded: Vec<UploadSuccess>,
    pub failed: Vec<UploadFailure>,
    pub summary: UploadSummary,
}

/// Uploads a batch strictly one item at a time. A failed item is recorded and
/// the batch moves on; the report always covers every item, keyed by the
/// original submission index, in submission order.
pub async fn run_upload_sequence(
    items: Vec<UploadItem>,
    host: &dyn ImageHost,
    cooldown: Duration,
) -> UploadReport {
    let total = items.len();
    let mut succeeded = Vec::new();
    let mut failed = Vec::new();

    tracing::info!("starting sequential upload of {} files", total);

    for (index, item) in items.into_iter().enumerate() {
        let size = item.bytes.len();
        let file_size_mb = size as f64 / (1024.0 * 1024.0);
        tracing::info!(
            "processing file {}/{}: {} ({:.2}MB)",
            index + 1,
            total,
            item.file_name,
            file_size_mb
        );

        // `item.bytes` moves into the host call and is freed right here, as
        // soon as the outcome is known.
        match host.upload(item.bytes, &item.file_name).await {
            Ok(url) => {
                tracing::info!("file {}/{} uploaded: {}", index + 1, total, url);
                succeeded.push(UploadSuccess {
                    index,
                    original_name: item.file_name,
                    url,
                    size,
                    file_size_mb: format!("{:.2}", file_size_mb),
                });
            }
            Err(e) => {
                tracing::warn!("file {}/{} failed: {}", index + 1, total, e);
                failed.push(UploadFailure {
                    index,
                    original_name: item.file_name,
                    error: e.to_string(),
                });
            }
        }

        if index + 1 < total && !cooldown.is_zero() {
            tokio::time::sleep(cooldown).await;
        }
    }

    tracing::info!(
        "sequential upload completed. success: {}, errors: {}",
        succeeded.len(),
        failed.len()
    );

    UploadReport {
        summary: UploadSummary {
            total,
            succeeded: succeeded.len(),
            failed: failed.len(),
        },
        succeeded,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Host that fails every index listed in `fail_on` and counts calls.
    struct ScriptedHost {
        fail_on: Vec<usize>,
        calls: AtomicUsize,
    }

    impl ScriptedHost {
        fn new(fail_on: Vec<usize>) -> ScriptedHost {
            ScriptedHost {
                fail_on,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ImageHost for ScriptedHost {
        async fn upload(&self, _bytes: Vec<u8>, file_name: &str) -> Result<String, UploadError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_on.contains(&call) {
                Err(UploadError::HttpStatus(503))
            } else {
                Ok(format!("https://files.example.test/{}", file_name))
            }
        }
    }

    fn items(count: usize) -> Vec<UploadItem> {
        (0..count)
            .map(|i| UploadItem {
                bytes: vec![0u8; 16],
                file_name: format!("photo_{}.jpg", i),
                mime_type: "image/jpeg".to_string(),
            })
            .collect()
    }

    #[tokio::test]
    async fn one_failure_does_not_abort_the_batch() {
        let host = ScriptedHost::new(vec![1]);
        let report = run_upload_sequence(items(3), &host, Duration::ZERO).await;

        assert_eq!(report.summary.total, 3);
        assert_eq!(report.succeeded.len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].index, 1);
        // Every item was attempted
        assert_eq!(host.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn outcomes_keep_submission_order_and_index() {
        let host = ScriptedHost::new(vec![0, 2]);
        let report = run_upload_sequence(items(4), &host, Duration::ZERO).await;

        let ok: Vec<usize> = report.succeeded.iter().map(|s| s.index).collect();
        let err: Vec<usize> = report.failed.iter().map(|f| f.index).collect();
        assert_eq!(ok, vec![1, 3]);
        assert_eq!(err, vec![0, 2]);
        assert_eq!(report.succeeded[0].original_name, "photo_1.jpg");
        assert_eq!(
            report.succeeded[0].url,
            "https://files.example.test/photo_1.jpg"
        );
    }

    #[tokio::test]
    async fn empty_batch_never_touches_the_host() {
        let host = ScriptedHost::new(vec![]);
        let report = run_upload_sequence(Vec::new(), &host, Duration::ZERO).await;

        assert_eq!(report.summary.total, 0);
        assert!(report.succeeded.is_empty());
        assert!(report.failed.is_empty());
        assert_eq!(host.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn all_failures_still_return_a_report() {
        let host = ScriptedHost::new(vec![0, 1]);
        let report = run_upload_sequence(items(2), &host, Duration::ZERO).await;

        assert_eq!(report.summary.failed, 2);
        assert_eq!(report.summary.succeeded, 0);
        assert_eq!(report.failed[0].error, "host rejected upload: HTTP 503");
    }
}
