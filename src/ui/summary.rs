// src/ui/summary.rs
use eframe::egui;
use crate::analysis::SummaryCards;

pub fn show_summary(ui: &mut egui::Ui, cards: &SummaryCards) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Summary");
        ui.add_space(8.0);

        ui.columns(4, |columns| {
            summary_card(&mut columns[0], "Total Equipment", &cards.total_equipment);
            summary_card(&mut columns[1], "Avg Flowrate", &cards.avg_flowrate);
            summary_card(&mut columns[2], "Max Pressure", &cards.max_pressure);
            summary_card(&mut columns[3], "Temp Range", &cards.temperature_range);
        });
    });
}

fn summary_card(ui: &mut egui::Ui, title: &str, value: &str) {
    ui.vertical_centered(|ui| {
        ui.label(title);
        ui.label(egui::RichText::new(value).strong().size(18.0));
    });
}
