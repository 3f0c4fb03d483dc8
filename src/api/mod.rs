// src/api/mod.rs
//! Backend contract: the three HTTP endpoints the dashboard consumes.
//!
//! Implementations only move bytes. Deciding whether a response counts as a
//! success is done by [`parse_upload_response`] and [`parse_history_response`]
//! so every implementation classifies failures the same way.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::error::DashboardError;
use crate::models::{AnalysisResult, HistoryEntry, UploadFile};

pub mod http;

pub use http::HttpApi;

/// Raw status and body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// POST the file as multipart field `file`. Errors only on transport failure.
    async fn upload(&self, file: &UploadFile) -> Result<ApiResponse>;

    /// GET the upload history. Errors only on transport failure.
    async fn history(&self) -> Result<ApiResponse>;

    /// GET the generated PDF report.
    async fn report(&self) -> Result<Vec<u8>>;

    /// Where the report can be opened directly.
    fn report_url(&self) -> String;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Classifies an upload response: non-2xx, empty, or unparsable bodies all
/// become [`DashboardError::UploadFailed`].
pub fn parse_upload_response(response: &ApiResponse) -> Result<AnalysisResult, DashboardError> {
    if !response.is_success() {
        let reason = serde_json::from_str::<ErrorBody>(&response.body)
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("server returned HTTP {}", response.status));
        return Err(DashboardError::upload_failed(reason));
    }

    if response.body.trim().is_empty() {
        return Err(DashboardError::upload_failed("empty response from server"));
    }

    serde_json::from_str(&response.body)
        .map_err(|e| DashboardError::upload_failed(format!("malformed response: {}", e)))
}

pub fn parse_history_response(response: &ApiResponse) -> Result<Vec<HistoryEntry>, DashboardError> {
    if !response.is_success() {
        return Err(DashboardError::history_failed(format!(
            "server returned HTTP {}",
            response.status
        )));
    }

    serde_json::from_str(&response.body)
        .map_err(|e| DashboardError::history_failed(format!("malformed response: {}", e)))
}
