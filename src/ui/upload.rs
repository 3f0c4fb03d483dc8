// src/ui/upload.rs
use eframe::egui;
use crate::state::AppState;

/// What the user asked for from the upload bar this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UploadAction {
    ChooseFile,
    Upload,
    OpenReport,
    SaveReport,
}

pub fn show_upload_bar(ui: &mut egui::Ui, state: &AppState) -> Option<UploadAction> {
    let mut action = None;

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            if ui.button("📂 Choose CSV File").clicked() {
                action = Some(UploadAction::ChooseFile);
            }

            let file_label = state.upload.selected_name().unwrap_or("No file selected");
            ui.label(file_label);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("💾 Save Report...").clicked() {
                    action = Some(UploadAction::SaveReport);
                }
                if ui.button("📄 Download Report as PDF").clicked() {
                    action = Some(UploadAction::OpenReport);
                }

                let idle = !state.upload.is_in_flight();
                if ui.add_enabled(idle, egui::Button::new("⬆ Upload")).clicked() {
                    action = Some(UploadAction::Upload);
                }
                if let Some(filename) = state.upload.in_flight() {
                    ui.spinner();
                    ui.label(format!("Uploading {}...", filename));
                }
            });
        });
    });

    action
}
