// src/api/http.rs
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use super::{AnalysisApi, ApiResponse};
use crate::config::AppConfig;
use crate::models::UploadFile;

/// reqwest-backed implementation of the backend contract.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: AppConfig,
}

impl HttpApi {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    async fn into_response(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        // Body is read as text first; an empty body is classified later.
        let body = response.text().await.context("Failed to read response body")?;
        Ok(ApiResponse::new(status, body))
    }
}

#[async_trait]
impl AnalysisApi for HttpApi {
    async fn upload(&self, file: &UploadFile) -> Result<ApiResponse> {
        let url = self.config.upload_url();
        debug!(%url, filename = %file.filename, bytes = file.bytes.len(), "POST upload");

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.filename.clone())
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .timeout(self.config.upload_timeout())
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;

        Self::into_response(response).await
    }

    async fn history(&self) -> Result<ApiResponse> {
        let url = self.config.history_url();
        debug!(%url, "GET history");

        let response = self
            .client
            .get(&url)
            .timeout(self.config.history_timeout())
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        Self::into_response(response).await
    }

    async fn report(&self) -> Result<Vec<u8>> {
        let url = self.config.report_url();
        debug!(%url, "GET report");

        let response = self
            .client
            .get(&url)
            .timeout(self.config.report_timeout())
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {}: {}", response.status(), url));
        }

        let bytes = response.bytes().await.context("Failed to read report body")?;
        Ok(bytes.to_vec())
    }

    fn report_url(&self) -> String {
        self.config.report_url()
    }
}
