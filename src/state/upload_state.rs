// src/state/upload_state.rs
use tracing::info;

use crate::error::DashboardError;
use crate::models::UploadFile;

/// Selected file and in-flight tracking for the upload flow.
#[derive(Debug, Default)]
pub struct UploadState {
    selected: Option<UploadFile>,
    in_flight: Option<String>,
}

impl UploadState {
    /// Replaces whatever was selected before. No validation happens here.
    pub fn select_file(&mut self, file: UploadFile) {
        info!(filename = %file.filename, "File selected");
        self.selected = Some(file);
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|file| file.filename.as_str())
    }

    pub fn in_flight(&self) -> Option<&str> {
        self.in_flight.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Hands out the selected file for a new upload.
    ///
    /// The selection is consumed whether the upload later succeeds or fails.
    pub fn begin(&mut self) -> Result<UploadFile, DashboardError> {
        if self.in_flight.is_some() {
            return Err(DashboardError::UploadInProgress);
        }
        let file = self.selected.take().ok_or(DashboardError::NoFileSelected)?;
        self.in_flight = Some(file.filename.clone());
        Ok(file)
    }

    pub fn finish(&mut self) {
        self.in_flight = None;
    }
}
