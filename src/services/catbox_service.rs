use crate::config::Config;
use crate::services::upload_service::{ImageHost, UploadError};
use async_trait::async_trait;
use reqwest::Client;

const CATBOX_URL_PREFIX: &str = "https://files.catbox.moe/";

/// catbox.moe file host: anonymous multipart upload, 200MB limit, permanent
/// free hosting. The API answers with the bare file URL as plain text.
#[derive(Clone)]
pub struct CatboxService {
    client: Client,
    api_url: String,
}

impl CatboxService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_url: config.catbox_api_url.clone(),
        }
    }
}

#[async_trait]
impl ImageHost for CatboxService {
    async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> Result<String, UploadError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());

        let form = reqwest::multipart::Form::new()
            .text("reqtype", "fileupload")
            .part("fileToUpload", part);

        let response = self
            .client
            .post(&self.api_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(UploadError::HttpStatus(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        let url = body.trim();
        if url.starts_with(CATBOX_URL_PREFIX) {
            Ok(url.to_string())
        } else {
            Err(UploadError::InvalidResponse(body))
        }
    }
}
