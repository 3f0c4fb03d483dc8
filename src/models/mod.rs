// src/models/mod.rs
pub mod analysis;
pub mod history;
pub mod upload;

// Re-export commonly used types
pub use analysis::{AnalysisResult, Averages, EquipmentRecord, Summary};
pub use history::HistoryEntry;
pub use upload::UploadFile;
