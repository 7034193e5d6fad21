use crate::config::Config;
use crate::services::upload_service::UploadItem;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

/// Telegram caps a media group at 10 entries.
const MEDIA_GROUP_LIMIT: usize = 10;

#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("request error: {0}")]
    Network(String),

    #[error("Telegram API error: {0}")]
    Api(String),
}

#[derive(Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Bot-API notifier for new enquiries. Attachments ride along with the
/// message where Telegram allows it; any failure on the file path falls back
/// to a plain text message so the enquiry itself is never lost.
#[derive(Clone)]
pub struct TelegramService {
    client: Client,
    api_base: String,
    chat_id: String,
}

impl TelegramService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_base: format!("https://api.telegram.org/bot{}", config.telegram_bot_token),
            chat_id: config.telegram_chat_id.clone(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.api_base, method)
    }

    pub async fn send_message(&self, text: &str) -> Result<(), TelegramError> {
        let payload = SendMessagePayload {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
        };

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&payload)
            .send()
            .await
            .map_err(|e| TelegramError::Network(e.to_string()))?;

        Self::check(response).await
    }

    /// Delivers the enquiry message, attaching the submitted files. Never
    /// returns an error: a failed file delivery degrades to a text message,
    /// and a failed text message is only logged.
    pub async fn notify_submission(&self, message: &str, attachments: Vec<UploadItem>) {
        if attachments.is_empty() {
            if let Err(e) = self.send_message(message).await {
                tracing::error!("error sending Telegram message: {}", e);
            }
            return;
        }

        let count = attachments.len();
        match self.send_attachments(message, attachments).await {
            Ok(()) => tracing::info!("files sent successfully: {} files", count),
            Err(e) => {
                tracing::error!("error sending files to Telegram: {}", e);
                if let Err(e) = self.send_message(message).await {
                    tracing::error!("error sending fallback Telegram message: {}", e);
                }
            }
        }
    }

    async fn send_attachments(
        &self,
        message: &str,
        attachments: Vec<UploadItem>,
    ) -> Result<(), TelegramError> {
        let (media, documents): (Vec<UploadItem>, Vec<UploadItem>) =
            attachments.into_iter().partition(|f| {
                f.mime_type.starts_with("image/") || f.mime_type.starts_with("video/")
            });

        if !media.is_empty() {
            if media.len() == 1 {
                let item = media.into_iter().next().expect("len checked");
                self.send_single_media(item, message).await?;
            } else {
                self.send_media_group(media, message).await?;
            }

            // Documents cannot join a media group; they go out one by one.
            for doc in documents {
                let caption = format!("📎 Додатковий документ: {}", doc.file_name);
                self.send_document(doc, &caption, false).await?;
            }
        } else if !documents.is_empty() {
            let mut docs = documents.into_iter();
            let first = docs.next().expect("non-empty checked");
            self.send_document(first, message, true).await?;

            for doc in docs {
                let caption = format!("📎 Додатковий документ: {}", doc.file_name);
                self.send_document(doc, &caption, false).await?;
            }
        }

        Ok(())
    }

    async fn send_single_media(
        &self,
        item: UploadItem,
        caption: &str,
    ) -> Result<(), TelegramError> {
        let (method, field) = if item.mime_type.starts_with("image/") {
            ("sendPhoto", "photo")
        } else {
            ("sendVideo", "video")
        };

        let part = Part::bytes(item.bytes)
            .file_name(item.file_name)
            .mime_str(&item.mime_type)
            .map_err(|e| TelegramError::Api(e.to_string()))?;

        let form = Form::new()
            .text("chat_id", self.chat_id.clone())
            .text("caption", caption.to_string())
            .text("parse_mode", "HTML")
            .part(field.to_string(), part);

        let response = self
            .client
            .post(self.method_url(method))
            .multipart(form)
            .send()
            .await
            .map_err(|e| TelegramError::Network(e.to_string()))?;

        Self::check(response).await
    }

    async fn send_media_group(
        &self,
        media: Vec<UploadItem>,
        caption: &str,
    ) -> Result<(), TelegramError> {
        let mut descriptors = Vec::new();
        let mut form = Form::new().text("chat_id", self.chat_id.clone());

        for (i, item) in media.into_iter().take(MEDIA_GROUP_LIMIT).enumerate() {
            let kind = if item.mime_type.starts_with("image/") {
                "photo"
            } else {
                "video"
            };

            let mut entry = serde_json::json!({
                "type": kind,
                "media": format!("attach://file{}", i),
            });
            if i == 0 {
                entry["caption"] = caption.into();
                entry["parse_mode"] = "HTML".into();
            }
            descriptors.push(entry);

            let part = Part::bytes(item.bytes)
                .file_name(item.file_name)
                .mime_str(&item.mime_type)
                .map_err(|e| TelegramError::Api(e.to_string()))?;
            form = form.part(format!("file{}", i), part);
        }

        let media_json = serde_json::to_string(&descriptors)
            .map_err(|e| TelegramError::Api(e.to_string()))?;
        form = form.text("media", media_json);

        let response = self
            .client
            .post(self.method_url("sendMediaGroup"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| TelegramError::Network(e.to_string()))?;

        Self::check(response).await
    }

    async fn send_document(
        &self,
        item: UploadItem,
        caption: &str,
        html: bool,
    ) -> Result<(), TelegramError> {
        let part = Part::bytes(item.bytes)
            .file_name(item.file_name)
            .mime_str(&item.mime_type)
            .map_err(|e| TelegramError::Api(e.to_string()))?;

        let mut form = Form::new()
            .text("chat_id", self.chat_id.clone())
            .text("caption", caption.to_string())
            .part("document", part);
        if html {
            form = form.text("parse_mode", "HTML");
        }

        let response = self
            .client
            .post(self.method_url("sendDocument"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| TelegramError::Network(e.to_string()))?;

        Self::check(response).await
    }

    async fn check(response: reqwest::Response) -> Result<(), TelegramError> {
        if response.status().is_success() {
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(TelegramError::Api(error_text))
        }
    }
}
