// src/worker.rs
//! Background network work.
//!
//! Requests run on a small tokio runtime. Their outcomes come back to the UI
//! thread as [`WorkerEvent`]s, where `AppState::apply` is the only writer.

use anyhow::{Context, Result};
use eframe::egui;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::{parse_history_response, parse_upload_response, AnalysisApi};
use crate::error::DashboardError;
use crate::models::{AnalysisResult, HistoryEntry, UploadFile};

#[derive(Debug, Clone, PartialEq)]
pub enum WorkerEvent {
    UploadFinished(Result<AnalysisResult, DashboardError>),
    /// `generation` is the issue order of the request, not its arrival order.
    HistoryFetched {
        generation: u64,
        outcome: Result<Vec<HistoryEntry>, DashboardError>,
    },
    ReportSaved(Result<PathBuf, DashboardError>),
}

impl WorkerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WorkerEvent::UploadFinished(Ok(_)) => "upload succeeded",
            WorkerEvent::UploadFinished(Err(_)) => "upload failed",
            WorkerEvent::HistoryFetched { outcome: Ok(_), .. } => "history fetched",
            WorkerEvent::HistoryFetched { outcome: Err(_), .. } => "history failed",
            WorkerEvent::ReportSaved(Ok(_)) => "report saved",
            WorkerEvent::ReportSaved(Err(_)) => "report failed",
        }
    }
}

/// Numbers history requests in the order they are issued.
#[derive(Debug, Clone, Default)]
pub struct RefreshGenerations(Arc<AtomicU64>);

impl RefreshGenerations {
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Sends events to the UI thread and wakes it up.
#[derive(Clone)]
pub struct EventSink {
    sender: Sender<WorkerEvent>,
    repaint: Option<egui::Context>,
}

impl EventSink {
    pub fn new(sender: Sender<WorkerEvent>) -> Self {
        Self { sender, repaint: None }
    }

    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn send(&self, event: WorkerEvent) {
        if self.sender.send(event).is_err() {
            error!("UI thread is gone, dropping worker event");
            return;
        }
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}

/// One upload cycle: upload, parse, publish, then refresh history on success.
///
/// The history request is only issued after the upload response has been
/// parsed, and its failure never affects the upload outcome.
pub async fn run_upload_cycle(
    api: &dyn AnalysisApi,
    file: UploadFile,
    sink: &EventSink,
    generations: &RefreshGenerations,
) {
    info!(filename = %file.filename, "Uploading");
    let outcome = match api.upload(&file).await {
        Ok(response) => parse_upload_response(&response),
        Err(e) => Err(DashboardError::upload_failed(format!("{:#}", e))),
    };
    drop(file);

    match &outcome {
        Ok(result) => info!(rows = result.rows.len(), "Upload succeeded"),
        Err(e) => error!(error = %e, "Upload failed"),
    }

    let succeeded = outcome.is_ok();
    sink.send(WorkerEvent::UploadFinished(outcome));

    if succeeded {
        refresh_history(api, generations.next(), sink).await;
    }
}

pub async fn refresh_history(api: &dyn AnalysisApi, generation: u64, sink: &EventSink) {
    let outcome = fetch_history(api).await;
    sink.send(WorkerEvent::HistoryFetched { generation, outcome });
}

pub async fn fetch_history(api: &dyn AnalysisApi) -> Result<Vec<HistoryEntry>, DashboardError> {
    match api.history().await {
        Ok(response) => parse_history_response(&response),
        Err(e) => Err(DashboardError::history_failed(format!("{:#}", e))),
    }
}

pub async fn save_report(api: &dyn AnalysisApi, path: PathBuf) -> Result<PathBuf, DashboardError> {
    let bytes = api
        .report()
        .await
        .map_err(|e| DashboardError::report_failed(format!("{:#}", e)))?;
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| DashboardError::report_failed(format!("{}: {}", path.display(), e)))?;
    info!(path = %path.display(), bytes = bytes.len(), "Report saved");
    Ok(path)
}

pub struct Worker {
    runtime: tokio::runtime::Runtime,
    api: Arc<dyn AnalysisApi>,
    sink: EventSink,
    receiver: Receiver<WorkerEvent>,
    generations: RefreshGenerations,
}

impl Worker {
    pub fn new(api: Arc<dyn AnalysisApi>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("chemviz-net")
            .enable_all()
            .build()
            .context("Failed to start network runtime")?;
        let (sender, receiver) = mpsc::channel();

        Ok(Self {
            runtime,
            api,
            sink: EventSink::new(sender),
            receiver,
            generations: RefreshGenerations::default(),
        })
    }

    /// Wake the UI whenever an event is delivered.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.sink = self.sink.with_repaint(ctx);
        self
    }

    pub fn report_url(&self) -> String {
        self.api.report_url()
    }

    pub fn spawn_upload(&self, file: UploadFile) {
        let api = Arc::clone(&self.api);
        let sink = self.sink.clone();
        let generations = self.generations.clone();
        self.runtime.spawn(async move {
            run_upload_cycle(api.as_ref(), file, &sink, &generations).await;
        });
    }

    pub fn spawn_history_refresh(&self) {
        let api = Arc::clone(&self.api);
        let sink = self.sink.clone();
        let generation = self.generations.next();
        self.runtime.spawn(async move {
            refresh_history(api.as_ref(), generation, &sink).await;
        });
    }

    pub fn spawn_report_download(&self, path: PathBuf) {
        let api = Arc::clone(&self.api);
        let sink = self.sink.clone();
        self.runtime.spawn(async move {
            sink.send(WorkerEvent::ReportSaved(save_report(api.as_ref(), path).await));
        });
    }

    /// Events that arrived since the last frame, oldest first.
    pub fn drain(&self) -> Vec<WorkerEvent> {
        self.receiver.try_iter().collect()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{sink, FakeApi};
    use super::*;
    use crate::api::ApiResponse;
    use anyhow::anyhow;

    fn csv() -> UploadFile {
        UploadFile::new("batch1.csv", b"Equipment Name\nP-100\n".to_vec())
    }

    #[tokio::test]
    async fn success_emits_result_then_history() {
        let api = FakeApi::default();
        api.push_upload(Ok(ApiResponse::new(200, r#"{"rows": []}"#)));
        api.push_history(Ok(ApiResponse::new(200, "[]")));
        let (sink, events) = sink();

        run_upload_cycle(&api, csv(), &sink, &RefreshGenerations::default()).await;

        let events: Vec<_> = events.try_iter().collect();
        assert_eq!(
            events,
            vec![
                WorkerEvent::UploadFinished(Ok(AnalysisResult::default())),
                WorkerEvent::HistoryFetched {
                    generation: 1,
                    outcome: Ok(Vec::new()),
                },
            ]
        );
        assert_eq!(api.calls(), vec!["upload:batch1.csv", "history"]);
    }

    #[tokio::test]
    async fn failure_skips_history() {
        let api = FakeApi::default();
        api.push_upload(Ok(ApiResponse::new(500, "")));
        let (sink, events) = sink();

        run_upload_cycle(&api, csv(), &sink, &RefreshGenerations::default()).await;

        let events: Vec<_> = events.try_iter().collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            WorkerEvent::UploadFinished(Err(DashboardError::UploadFailed(_)))
        ));
        assert_eq!(api.count("history"), 0);
    }

    #[tokio::test]
    async fn transport_error_is_upload_failed() {
        let api = FakeApi::default();
        api.push_upload(Err(anyhow!("timed out")));
        let (sink, events) = sink();

        run_upload_cycle(&api, csv(), &sink, &RefreshGenerations::default()).await;

        match events.try_iter().next() {
            Some(WorkerEvent::UploadFinished(Err(DashboardError::UploadFailed(reason)))) => {
                assert!(reason.contains("timed out"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn history_transport_error_is_history_failed() {
        let api = FakeApi::default();
        assert!(matches!(
            fetch_history(&api).await,
            Err(DashboardError::HistoryFetchFailed(_))
        ));
    }

    #[test]
    fn event_name_is_a_short_label() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"rows": [{"id": 1, "name": "P-100", "type": "Pump", "flowrate": 5.0, "pressure": 2.1, "temperature": 70.0}]}"#,
        )
        .unwrap();
        let event = WorkerEvent::UploadFinished(Ok(result));
        assert_eq!(event.name(), "upload succeeded");
        assert!(!event.name().contains("P-100"));

        let event = WorkerEvent::HistoryFetched {
            generation: 4,
            outcome: Err(DashboardError::history_failed("HTTP 500")),
        };
        assert_eq!(event.name(), "history failed");
    }

    #[test]
    fn generations_follow_issue_order() {
        let generations = RefreshGenerations::default();
        let shared = generations.clone();
        assert_eq!(generations.next(), 1);
        assert_eq!(shared.next(), 2);
        assert_eq!(generations.next(), 3);
    }

    #[test]
    fn slow_startup_history_does_not_hide_fresh_upload() {
        let api = FakeApi::default();
        api.push_history(Ok(ApiResponse::new(200, r#"[
            {"id": 1, "filename": "old.csv", "total_equipment": 2, "avg_flowrate": 1.0,
             "max_pressure": 1.0, "uploaded_at": "2024-03-04T09:00:00Z"}
        ]"#)));
        api.push_history(Ok(ApiResponse::new(200, r#"[
            {"id": 2, "filename": "batch1.csv", "total_equipment": 10, "avg_flowrate": 5.0,
             "max_pressure": 2.1, "uploaded_at": "2024-03-05T10:15:30Z"},
            {"id": 1, "filename": "old.csv", "total_equipment": 2, "avg_flowrate": 1.0,
             "max_pressure": 1.0, "uploaded_at": "2024-03-04T09:00:00Z"}
        ]"#)));
        api.history_delays
            .lock()
            .unwrap()
            .push(std::time::Duration::from_millis(300));
        api.push_upload(Ok(ApiResponse::new(200, r#"{"rows": []}"#)));
        let api = Arc::new(api);
        let worker = Worker::new(api.clone()).unwrap();
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);

        worker.spawn_history_refresh();
        while api.count("history") == 0 && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        worker.spawn_upload(csv());

        let mut events = Vec::new();
        while events.len() < 3 && std::time::Instant::now() < deadline {
            events.extend(worker.drain());
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert_eq!(events.len(), 3);
        assert!(matches!(
            events.last(),
            Some(WorkerEvent::HistoryFetched { generation: 1, .. })
        ));

        let mut state = crate::state::AppState::new();
        for event in events {
            state.apply(event);
        }
        let names: Vec<_> = state
            .history
            .entries()
            .iter()
            .map(|e| e.filename.as_str())
            .collect();
        assert_eq!(names, vec!["batch1.csv", "old.csv"]);
    }

    #[tokio::test]
    async fn save_report_writes_file() {
        let api = FakeApi::default();
        *api.report_response.lock().unwrap() = Some(Ok(b"%PDF-1.4".to_vec()));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");

        let saved = save_report(&api, path.clone()).await.unwrap();

        assert_eq!(saved, path);
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn save_report_failure() {
        let api = FakeApi::default();
        let dir = tempfile::tempdir().unwrap();
        let result = save_report(&api, dir.path().join("report.pdf")).await;
        assert!(matches!(result, Err(DashboardError::ReportFailed(_))));
    }
}
