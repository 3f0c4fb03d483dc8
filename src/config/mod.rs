// src/config/mod.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
const ENV_PREFIX: &str = "CHEMVIZ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
    pub upload_timeout_secs: u64,
    pub history_timeout_secs: u64,
    pub report_timeout_secs: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            upload_timeout_secs: 120,
            history_timeout_secs: 5,
            report_timeout_secs: 60,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, then `<config dir>/chemviz/config.toml`, then `CHEMVIZ_*` env vars.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path().as_deref())
    }

    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("api_base", defaults.api_base)?
            .set_default("upload_timeout_secs", defaults.upload_timeout_secs)?
            .set_default("history_timeout_secs", defaults.history_timeout_secs)?
            .set_default("report_timeout_secs", defaults.report_timeout_secs)?
            .set_default("log_level", defaults.log_level)?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path.to_path_buf()).required(false));
        }

        builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn upload_url(&self) -> String {
        self.endpoint("api/upload/")
    }

    pub fn history_url(&self) -> String {
        self.endpoint("api/history/")
    }

    pub fn report_url(&self) -> String {
        self.endpoint("api/report/pdf/")
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_secs)
    }

    pub fn history_timeout(&self) -> Duration {
        Duration::from_secs(self.history_timeout_secs)
    }

    pub fn report_timeout(&self) -> Duration {
        Duration::from_secs(self.report_timeout_secs)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chemviz").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn endpoints_ignore_trailing_slash() {
        let config = AppConfig {
            api_base: "http://backend:9000/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.upload_url(), "http://backend:9000/api/upload/");
        assert_eq!(config.history_url(), "http://backend:9000/api/history/");
        assert_eq!(config.report_url(), "http://backend:9000/api/report/pdf/");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.upload_timeout_secs, 120);
        assert_eq!(config.history_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "upload_timeout_secs = 30").unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();

        let config = AppConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.upload_timeout(), Duration::from_secs(30));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.report_timeout_secs, 60);
    }
}
