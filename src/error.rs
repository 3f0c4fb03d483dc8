// src/error.rs
use thiserror::Error;

/// Failures the dashboard knows how to present.
///
/// Network and parse errors are converted into one of these at the
/// component boundary, so the view never sees a raw transport error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("Please select a CSV file")]
    NoFileSelected,

    #[error("An upload is already in progress")]
    UploadInProgress,

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("History refresh failed: {0}")]
    HistoryFetchFailed(String),

    #[error("Upload a CSV first.")]
    NoAnalysis,

    #[error("Report download failed: {0}")]
    ReportFailed(String),
}

impl DashboardError {
    pub fn upload_failed(reason: impl Into<String>) -> Self {
        Self::UploadFailed(reason.into())
    }

    pub fn history_failed(reason: impl Into<String>) -> Self {
        Self::HistoryFetchFailed(reason.into())
    }

    pub fn report_failed(reason: impl Into<String>) -> Self {
        Self::ReportFailed(reason.into())
    }

    /// Whether the user has to acknowledge this before continuing.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::UploadFailed(_) | Self::ReportFailed(_))
    }

    /// History failures are logged only.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::HistoryFetchFailed(_))
    }
}
