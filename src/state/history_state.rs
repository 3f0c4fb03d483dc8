// src/state/history_state.rs
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::error::DashboardError;
use crate::models::HistoryEntry;

/// Last snapshot of the upload history, in server order.
#[derive(Debug, Default)]
pub struct HistoryState {
    entries: Vec<HistoryEntry>,
    last_refreshed: Option<DateTime<Utc>>,
    applied_generation: Option<u64>,
}

impl HistoryState {
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    /// Success replaces the whole list; failure keeps the stale one.
    ///
    /// A snapshot from a request issued before the one already shown is
    /// dropped, whatever order the responses arrive in.
    pub fn apply(&mut self, generation: u64, outcome: Result<Vec<HistoryEntry>, DashboardError>) {
        match outcome {
            Ok(_) if self.applied_generation.is_some_and(|applied| generation < applied) => {
                debug!(generation, applied = ?self.applied_generation, "Dropping stale history");
            }
            Ok(entries) => {
                info!(count = entries.len(), generation, "History refreshed");
                self.entries = entries;
                self.last_refreshed = Some(Utc::now());
                self.applied_generation = Some(generation);
            }
            Err(e) => {
                warn!(error = %e, kept = self.entries.len(), "Keeping previous history");
            }
        }
    }
}
