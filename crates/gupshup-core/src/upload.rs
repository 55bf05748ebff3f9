//! Image hosting
//!
//! Attachments and avatars are pushed to a third-party image host before
//! the chat or profile request is made; only the returned URL travels to
//! the API server.

use std::future::Future;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use crate::attachment::StagedImage;
use crate::config::ImageHostConfig;
use crate::error::{ChatError, ChatResult};

/// Uploads an image and returns its public URL.
pub trait ImageHost {
    fn upload(&self, image: &StagedImage) -> impl Future<Output = ChatResult<String>> + Send;
}

/// Unsigned multipart uploads to Cloudinary.
#[derive(Clone)]
pub struct CloudinaryUploader {
    http: Client,
    config: ImageHostConfig,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    error: Option<UploadFailure>,
}

#[derive(Deserialize)]
struct UploadFailure {
    message: String,
}

impl CloudinaryUploader {
    pub fn new(config: &ImageHostConfig) -> Self {
        Self {
            http: Client::new(),
            config: config.clone(),
        }
    }
}

impl ImageHost for CloudinaryUploader {
    async fn upload(&self, image: &StagedImage) -> ChatResult<String> {
        let url = self
            .config
            .upload_url()
            .ok_or_else(|| ChatError::Config("image host cloud name is not set".to_string()))?;
        let preset = self
            .config
            .upload_preset
            .clone()
            .ok_or_else(|| ChatError::Config("image host upload preset is not set".to_string()))?;
        let cloud = self.config.cloud_name.clone().unwrap_or_default();

        let file = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime)?;
        let form = Form::new()
            .part("file", file)
            .text("upload_preset", preset)
            .text("cloud_name", cloud);

        tracing::debug!(file = %image.file_name, bytes = image.len(), "Uploading image");
        let response = self.http.post(url).multipart(form).send().await?;
        let body: UploadResponse = serde_json::from_slice(&response.bytes().await?)?;

        match (body.secure_url, body.error) {
            (Some(url), _) => Ok(url),
            (None, Some(failure)) => Err(ChatError::Upload(failure.message)),
            (None, None) => Err(ChatError::Upload("no URL in upload response".to_string())),
        }
    }
}

/// Upload, logging and swallowing any failure.
///
/// Callers treat `None` exactly like "no image attached".
pub async fn upload_or_absent<H: ImageHost>(host: &H, image: &StagedImage) -> Option<String> {
    match host.upload(image).await {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!(error = %e, file = %image.file_name, "Image upload failed, continuing without it");
            None
        }
    }
}
