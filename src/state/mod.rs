// src/state/mod.rs
use tracing::debug;

use crate::error::DashboardError;
use crate::models::UploadFile;
use crate::worker::WorkerEvent;

pub mod analysis_state;
pub mod history_state;
pub mod ui_state;
pub mod upload_state;

pub use analysis_state::AnalysisState;
pub use history_state::HistoryState;
pub use ui_state::{Notice, NoticeKind, UiState};
pub use upload_state::UploadState;

/// Application state container.
///
/// Each field has a single writer: `UploadState` owns the selection,
/// `AnalysisState` the latest result and `HistoryState` the history
/// snapshot. The view only reads them; network outcomes arrive through
/// [`AppState::apply`].
#[derive(Debug, Default)]
pub struct AppState {
    pub upload: UploadState,
    pub analysis: AnalysisState,
    pub history: HistoryState,
    pub ui: UiState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, file: UploadFile) {
        self.upload.select_file(file);
    }

    /// Takes the selected file for upload, or shows why it can't.
    ///
    /// Returning `None` means no request may be made.
    pub fn begin_upload(&mut self) -> Option<UploadFile> {
        match self.upload.begin() {
            Ok(file) => Some(file),
            Err(e) => {
                self.ui.report_error(&e);
                None
            }
        }
    }

    /// The report can only be saved once something was analysed.
    pub fn check_report_available(&mut self) -> Result<(), DashboardError> {
        if self.analysis.latest().is_some() {
            return Ok(());
        }
        let err = DashboardError::NoAnalysis;
        self.ui.report_error(&err);
        Err(err)
    }

    pub fn apply(&mut self, event: WorkerEvent) {
        debug!(event = event.name(), "Applying worker event");
        match event {
            WorkerEvent::UploadFinished(outcome) => {
                self.upload.finish();
                match outcome {
                    Ok(result) => self.analysis.publish(result),
                    Err(e) => self.ui.report_error(&e),
                }
            }
            WorkerEvent::HistoryFetched { generation, outcome } => {
                self.history.apply(generation, outcome)
            }
            WorkerEvent::ReportSaved(Ok(path)) => {
                self.ui
                    .show_info(format!("PDF downloaded successfully to {}", path.display()));
            }
            WorkerEvent::ReportSaved(Err(e)) => self.ui.report_error(&e),
        }
    }
}
