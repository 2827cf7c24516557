//! Configuration
//!
//! JSON config under the user's config directory. A corrupt file is backed
//! up and replaced with defaults rather than refusing to start.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default interpreter language tag ("en" or "hi")
    pub language: String,

    // Transcription service
    pub transcribe_url: String,
    pub transcribe_api_key: String,

    // Stores
    pub list_path: String,
    pub history_db_path: String,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            transcribe_url: "https://api.assemblyai.com".to_string(),
            transcribe_api_key: "".to_string(),
            list_path: dirs::data_dir()
                .unwrap_or_default()
                .join("sauda/list.json")
                .to_string_lossy()
                .to_string(),
            history_db_path: dirs::data_dir()
                .unwrap_or_default()
                .join("sauda/history.db")
                .to_string_lossy()
                .to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from file, or create defaults
    pub fn load() -> Result<Self> {
        let config_path = config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            match serde_json::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    // Keep the corrupt file around for debugging
                    let backup_path = config_path.with_extension("json.corrupt");
                    let _ = std::fs::rename(&config_path, &backup_path);
                    Ok(Self::default())
                }
            }
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sauda")
        .join("config.json")
}
