// src/ui/mod.rs
pub mod charts;
pub mod summary;
pub mod tables;
pub mod upload;

pub use upload::UploadAction;
