// src/app.rs
use eframe::egui;
use rfd::FileDialog;
use tracing::error;

use crate::models::UploadFile;
use crate::state::{AppState, NoticeKind};
use crate::ui::UploadAction;
use crate::worker::Worker;

pub struct ChemVizApp {
    state: AppState,
    worker: Worker,
}

impl ChemVizApp {
    pub fn new(worker: Worker) -> Self {
        // History is loaded once at startup and after every successful upload.
        worker.spawn_history_refresh();

        Self {
            state: AppState::new(),
            worker,
        }
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: UploadAction) {
        match action {
            UploadAction::ChooseFile => self.choose_file(),
            UploadAction::Upload => {
                if let Some(file) = self.state.begin_upload() {
                    self.worker.spawn_upload(file);
                }
            }
            UploadAction::OpenReport => {
                let url = self.worker.report_url();
                ctx.output_mut(|o| o.open_url = Some(egui::OpenUrl::new_tab(url)));
            }
            UploadAction::SaveReport => self.save_report(),
        }
    }

    fn choose_file(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_title("Select CSV");

        if let Some(path) = file_dialog.pick_file() {
            match UploadFile::from_path(&path) {
                Ok(file) => self.state.select_file(file),
                Err(e) => {
                    error!(error = %e, "Could not read selected file");
                    self.state.ui.show_prompt(format!("{:#}", e));
                }
            }
        }
    }

    fn save_report(&mut self) {
        if self.state.check_report_available().is_err() {
            return;
        }

        let default_name = format!(
            "analysis_{}.pdf",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        let file_dialog = FileDialog::new()
            .add_filter("PDF Files", &["pdf"])
            .set_title("Save PDF")
            .set_file_name(default_name);

        if let Some(path) = file_dialog.save_file() {
            self.worker.spawn_report_download(path);
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let notice = match self.state.ui.notice.clone() {
            Some(notice) => notice,
            None => return,
        };

        let title = match notice.kind {
            NoticeKind::Prompt => "Notice",
            NoticeKind::Blocking => "Error",
            NoticeKind::Info => "Success",
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                if notice.kind == NoticeKind::Blocking {
                    ui.colored_label(egui::Color32::RED, &notice.message);
                } else {
                    ui.label(&notice.message);
                }
                if ui.button("OK").clicked() {
                    self.state.ui.dismiss();
                }
            });
    }
}

impl eframe::App for ChemVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in self.worker.drain() {
            self.state.apply(event);
        }

        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Chemical Equipment CSV Analyzer");
                    });
                    ui.add_space(16.0);

                    action = crate::ui::upload::show_upload_bar(ui, &self.state);
                    ui.add_space(16.0);

                    if let Some(view) = self.state.analysis.view_model() {
                        if let Some(cards) = &view.summary {
                            crate::ui::summary::show_summary(ui, cards);
                            ui.add_space(16.0);
                        }
                        if let Some(charts) = &view.charts {
                            crate::ui::charts::show_charts(ui, charts);
                            ui.add_space(16.0);
                        }
                        if let Some(rows) = view.rows {
                            crate::ui::tables::show_equipment_table(ui, rows);
                            ui.add_space(16.0);
                        }
                    }

                    crate::ui::tables::show_history_table(
                        ui,
                        self.state.history.entries(),
                        self.state.history.last_refreshed(),
                    );
                });
        });

        // Clicks made while a notice is open are dropped
        if let Some(action) = action {
            if self.state.ui.notice.is_none() {
                self.handle_action(ctx, action);
            }
        }

        self.show_notice(ctx);
    }
}
