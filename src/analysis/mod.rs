// src/analysis/mod.rs
pub mod view_model;

// Re-export commonly used types
pub use view_model::{
    AnalysisViewModel,
    BarSeries,
    ChartSeries,
    PieSeries,
    SummaryCards,
};
