// src/state/analysis_state.rs
use tracing::info;

use crate::analysis::AnalysisViewModel;
use crate::models::AnalysisResult;

/// The most recent successful analysis. Replaced wholesale, never merged.
#[derive(Debug, Default)]
pub struct AnalysisState {
    latest: Option<AnalysisResult>,
}

impl AnalysisState {
    pub fn latest(&self) -> Option<&AnalysisResult> {
        self.latest.as_ref()
    }

    pub fn publish(&mut self, result: AnalysisResult) {
        info!(rows = result.rows.len(), "Analysis result published");
        self.latest = Some(result);
    }

    pub fn view_model(&self) -> Option<AnalysisViewModel<'_>> {
        self.latest.as_ref().map(AnalysisViewModel::derive)
    }
}
