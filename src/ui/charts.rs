// src/ui/charts.rs
use eframe::egui;
use std::f32::consts::TAU;

use crate::analysis::{BarSeries, ChartSeries, PieSeries};

// Max angle covered by one triangle when tessellating pie slices.
const SLICE_STEP: f32 = 0.05;

pub fn show_charts(ui: &mut egui::Ui, charts: &ChartSeries) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Visual Analytics");
        ui.add_space(8.0);

        ui.columns(2, |columns| {
            draw_averages_bar(&mut columns[0], &charts.bar);
            draw_type_pie(&mut columns[1], &charts.pie);
        });
    });
}

fn draw_averages_bar(ui: &mut egui::Ui, series: &BarSeries) {
    ui.vertical(|ui| {
        ui.label("Averages");
        let plot = egui_plot::Plot::new("averages_bar")
            .height(240.0)
            .allow_zoom(false)
            .allow_drag(false)
            .show_background(false)
            .show_axes([false, true])
            .include_y(0.0);

        plot.show(ui, |plot_ui| {
            let bars: Vec<egui_plot::Bar> = series.labels.iter()
                .zip(series.values)
                .zip(series.colors)
                .enumerate()
                .map(|(i, ((label, value), color))| {
                    egui_plot::Bar::new(i as f64, value)
                        .name(label)
                        .width(0.6)
                        .fill(color)
                })
                .collect();

            plot_ui.bar_chart(egui_plot::BarChart::new(bars).name("Averages"));
        });

        ui.horizontal(|ui| {
            for ((label, value), color) in series.labels.iter().zip(series.values).zip(series.colors) {
                legend_swatch(ui, color);
                ui.label(format!("{}: {}", label, value));
            }
        });
    });
}

fn draw_type_pie(ui: &mut egui::Ui, series: &PieSeries) {
    ui.vertical(|ui| {
        ui.label("Equipment Type Distribution");

        let size = ui.available_width().min(240.0);
        let (rect, _response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());

        let total = series.total() as f32;
        if ui.is_rect_visible(rect) && total > 0.0 {
            let painter = ui.painter();
            let center = rect.center();
            let radius = size * 0.45;

            // Start at 12 o'clock, go clockwise
            let mut start = -TAU / 4.0;
            for (_, count, color) in series.slices() {
                let sweep = count as f32 / total * TAU;
                let steps = (sweep / SLICE_STEP).ceil().max(1.0) as usize;
                for step in 0..steps {
                    let a0 = start + sweep * step as f32 / steps as f32;
                    let a1 = start + sweep * (step + 1) as f32 / steps as f32;
                    painter.add(egui::Shape::convex_polygon(
                        vec![
                            center,
                            center + radius * egui::vec2(a0.cos(), a0.sin()),
                            center + radius * egui::vec2(a1.cos(), a1.sin()),
                        ],
                        color,
                        egui::Stroke::NONE,
                    ));
                }
                start += sweep;
            }
        } else if total == 0.0 {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No equipment types",
                egui::FontId::proportional(14.0),
                ui.visuals().weak_text_color(),
            );
        }

        for (label, count, color) in series.slices() {
            ui.horizontal(|ui| {
                legend_swatch(ui, color);
                ui.label(format!("{} ({})", label, count));
            });
        }
    });
}

fn legend_swatch(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
}
