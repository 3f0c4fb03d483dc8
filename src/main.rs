// src/main.rs
use eframe::egui;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod analysis;
mod api;
mod app;
mod config;
mod error;
mod models;
mod state;
mod ui;
mod worker;

use app::ChemVizApp;
use config::AppConfig;
use worker::Worker;

/// RUST_LOG wins over the configured level.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.log_level);
    info!(api_base = %config.api_base, "Starting chemviz");

    let api = api::HttpApi::new(config)?;
    let worker = Worker::new(Arc::new(api)).context("Failed to start background worker")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1300.0, 800.0])
            .with_title("Chemical Equipment CSV Analyzer"),
        ..Default::default()
    };

    eframe::run_native(
        "Chemical Equipment CSV Analyzer",
        options,
        Box::new(move |cc| {
            Box::new(ChemVizApp::new(worker.with_repaint(cc.egui_ctx.clone())))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
