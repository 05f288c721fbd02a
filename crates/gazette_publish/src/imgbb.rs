//! imgbb image host client.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::env;
use tracing::instrument;

use gazette_core::GeneratedImage;
use gazette_error::{GazetteResult, PublishError, PublishErrorKind};
use gazette_interface::ImageHost;

const UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

/// Uploads generated images to imgbb and returns the hosted URL.
pub struct ImgbbHost {
    http: reqwest::Client,
    api_key: String,
}

impl std::fmt::Debug for ImgbbHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImgbbHost").finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<UploadData>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: String,
}

impl ImgbbHost {
    /// Create an upload client.
    ///
    /// # Errors
    ///
    /// Fails when `IMGBB_API_KEY` is unset or the HTTP client cannot be
    /// built.
    pub fn new() -> GazetteResult<Self> {
        let api_key = env::var("IMGBB_API_KEY").map_err(|_| {
            PublishError::new(PublishErrorKind::MissingCredentials(
                "IMGBB_API_KEY".to_string(),
            ))
        })?;

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| PublishError::new(PublishErrorKind::Request(e.to_string())))?;

        Ok(Self { http, api_key })
    }

    fn file_name_for(mime_type: &str) -> &'static str {
        match mime_type {
            "image/jpeg" => "gazette.jpg",
            "image/webp" => "gazette.webp",
            _ => "gazette.png",
        }
    }
}

#[async_trait]
impl ImageHost for ImgbbHost {
    #[instrument(skip(self, image), fields(bytes = image.data.len(), mime = %image.mime_type))]
    async fn upload(&self, image: &GeneratedImage) -> GazetteResult<String> {
        let part = Part::bytes(image.data.clone())
            .file_name(Self::file_name_for(&image.mime_type))
            .mime_str(&image.mime_type)
            .map_err(|e| PublishError::new(PublishErrorKind::Request(e.to_string())))?;

        let form = Form::new()
            .text("key", self.api_key.clone())
            .part("image", part);

        let response = self
            .http
            .post(UPLOAD_URL)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PublishError::new(PublishErrorKind::Api {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Request(e.to_string())))?;

        match upload.data {
            Some(data) if upload.success => {
                tracing::info!(url = %data.url, "Uploaded image");
                Ok(data.url)
            }
            _ => Err(PublishError::new(PublishErrorKind::UploadRejected(
                "upload did not return a hosted URL".to_string(),
            ))
            .into()),
        }
    }
}
