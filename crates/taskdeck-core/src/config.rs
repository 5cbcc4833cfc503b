use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Key under which the workspace state is persisted in the key-value store.
pub const DEFAULT_STORAGE_KEY: &str = "taskdeck.workspace";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Quiet period before a pending change is flushed to storage.
    #[serde(default = "default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,

    /// Storage key for the persisted workspace state.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Directory backing the file store. Falls back to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_autosave_delay_ms() -> u64 {
    2000
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            autosave_delay_ms: default_autosave_delay_ms(),
            storage_key: default_storage_key(),
            data_dir: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskdeck/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskdeck/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskdeck\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join("taskdeck"))
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }
}
