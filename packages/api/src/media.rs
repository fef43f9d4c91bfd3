//! # Unsigned image upload to the hosted media service
//!
//! One multipart `POST` with the file bytes and the configured preset. The
//! service answers with JSON describing the stored asset; the only field the
//! client needs is `secure_url`.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use crate::error::{check_status, Error, Result};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

/// Uploads images with a fixed unsigned preset.
#[derive(Debug, Clone)]
pub struct MediaUploader {
    http: Client,
    pub(crate) upload_url: String,
    preset: String,
}

impl MediaUploader {
    pub fn with_client(http: Client, upload_url: String, preset: &str) -> Self {
        Self {
            http,
            upload_url,
            preset: preset.to_string(),
        }
    }

    /// Upload `bytes` as `file_name`, returning the hosted HTTPS URL.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        let size = bytes.len();
        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name.to_string()))
            .text("upload_preset", self.preset.clone());

        let res = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        let body = check_status(res)?.json::<UploadResponse>().await?;
        let url = body
            .secure_url
            .filter(|url| !url.is_empty())
            .ok_or(Error::MissingField("secure_url"))?;

        tracing::info!("uploaded {} ({} bytes) to {}", file_name, size, url);
        Ok(url)
    }
}
