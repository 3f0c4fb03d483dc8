// src/analysis/view_model.rs
use eframe::egui::Color32;

use crate::models::{AnalysisResult, Averages, EquipmentRecord, Summary};

pub const AVERAGE_LABELS: [&str; 3] = ["Flowrate", "Pressure", "Temperature"];

pub const AVERAGE_COLORS: [Color32; 3] = [
    Color32::from_rgb(0x4C, 0xAF, 0x50),
    Color32::from_rgb(0x21, 0x96, 0xF3),
    Color32::from_rgb(0xFF, 0x98, 0x00),
];

pub const CATEGORY_COLORS: [Color32; 5] = [
    Color32::from_rgb(0x42, 0xA5, 0xF5),
    Color32::from_rgb(0x66, 0xBB, 0x6A),
    Color32::from_rgb(0xFF, 0xA7, 0x26),
    Color32::from_rgb(0xAB, 0x47, 0xBC),
    Color32::from_rgb(0xEC, 0x40, 0x7A),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCards {
    pub total_equipment: String,
    pub avg_flowrate: String,
    pub max_pressure: String,
    pub temperature_range: String,
}

impl From<&Summary> for SummaryCards {
    fn from(summary: &Summary) -> Self {
        let (min, max) = summary.temperature_range;
        Self {
            total_equipment: summary.total_equipment.to_string(),
            avg_flowrate: summary.avg_flowrate.to_string(),
            max_pressure: summary.max_pressure.to_string(),
            temperature_range: format!("{} – {}", min, max),
        }
    }
}

/// Averages in fixed Flowrate, Pressure, Temperature order.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub labels: [&'static str; 3],
    pub values: [f64; 3],
    pub colors: [Color32; 3],
}

impl From<&Averages> for BarSeries {
    fn from(averages: &Averages) -> Self {
        Self {
            labels: AVERAGE_LABELS,
            values: [averages.flowrate, averages.pressure, averages.temperature],
            colors: AVERAGE_COLORS,
        }
    }
}

/// Category counts in the order the server listed them.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSeries {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
    pub colors: Vec<Color32>,
}

impl PieSeries {
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn slices(&self) -> impl Iterator<Item = (&str, u64, Color32)> + '_ {
        self.labels
            .iter()
            .zip(&self.counts)
            .zip(&self.colors)
            .map(|((label, count), color)| (label.as_str(), *count, *color))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub bar: BarSeries,
    pub pie: PieSeries,
}

/// Everything the view needs from the latest [`AnalysisResult`].
///
/// Each section is `None` when its source is absent, and the view skips it
/// entirely instead of drawing a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisViewModel<'a> {
    pub summary: Option<SummaryCards>,
    pub charts: Option<ChartSeries>,
    pub rows: Option<&'a [EquipmentRecord]>,
}

impl<'a> AnalysisViewModel<'a> {
    pub fn derive(result: &'a AnalysisResult) -> Self {
        Self {
            summary: result.summary.as_ref().map(SummaryCards::from),
            charts: derive_charts(result),
            rows: (!result.rows.is_empty()).then_some(result.rows.as_slice()),
        }
    }
}

// Both charts share a card, so they appear together or not at all. An empty
// distribution still counts as present and yields a pie with no slices.
fn derive_charts(result: &AnalysisResult) -> Option<ChartSeries> {
    let averages = result.averages.as_ref()?;
    let distribution = result.type_distribution.as_ref()?;

    let pie = PieSeries {
        labels: distribution.keys().cloned().collect(),
        counts: distribution.values().copied().collect(),
        colors: CATEGORY_COLORS
            .iter()
            .copied()
            .cycle()
            .take(distribution.len())
            .collect(),
    };

    Some(ChartSeries {
        bar: BarSeries::from(averages),
        pie,
    })
}
