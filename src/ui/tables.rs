// src/ui/tables.rs
use chrono::{DateTime, Local, Utc};
use eframe::egui;
use crate::models::{EquipmentRecord, HistoryEntry};

pub fn show_equipment_table(ui: &mut egui::Ui, rows: &[EquipmentRecord]) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Equipment Details");
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .id_source("equipment_table_scroll")
            .max_height(300.0)
            .show(ui, |ui| {
                egui::Grid::new("equipment_table")
                    .num_columns(6)
                    .striped(true)
                    .spacing([24.0, 4.0])
                    .show(ui, |ui| {
                        for header in ["ID", "Name", "Type", "Flowrate", "Pressure", "Temperature"] {
                            ui.strong(header);
                        }
                        ui.end_row();

                        for row in rows {
                            ui.label(row.id.to_string());
                            ui.label(&row.name);
                            ui.label(&row.equipment_type);
                            ui.label(row.flowrate.to_string());
                            ui.label(row.pressure.to_string());
                            ui.label(row.temperature.to_string());
                            ui.end_row();
                        }
                    });
            });
    });
}

pub fn show_history_table(
    ui: &mut egui::Ui,
    entries: &[HistoryEntry],
    last_refreshed: Option<DateTime<Utc>>,
) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.heading("Past 5 Sample Details");
            if let Some(at) = last_refreshed {
                ui.weak(format!("refreshed {}", at.with_timezone(&Local).format("%H:%M:%S")));
            }
        });
        ui.add_space(8.0);

        egui::Grid::new("history_table")
            .num_columns(5)
            .striped(true)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                for header in ["Filename", "Total", "Avg Flowrate", "Max Pressure", "Uploaded"] {
                    ui.strong(header);
                }
                ui.end_row();

                for entry in entries {
                    ui.label(&entry.filename);
                    ui.label(entry.total_equipment.to_string());
                    ui.label(entry.avg_flowrate.to_string());
                    ui.label(entry.max_pressure.to_string());
                    ui.label(entry.uploaded_at_local());
                    ui.end_row();
                }
            });
    });
}
