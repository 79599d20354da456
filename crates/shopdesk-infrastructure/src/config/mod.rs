//! Application configuration: a JSON file under the user's config directory,
//! overridable from the environment and the command line.

mod timeouts;

pub use timeouts::TimeoutConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

pub const APP_DIR_NAME: &str = "shopdesk";
pub const API_URL_ENV: &str = "SHOPDESK_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

const CONFIG_FILE_NAME: &str = "config.json";
const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the REST backend
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub log_dir: Option<PathBuf>,
    pub session_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: TimeoutConfig::default().http_request.as_secs(),
            log_dir: None,
            session_file: None,
        }
    }
}

impl AppConfig {
    /// Load from the default location, then apply the environment override.
    pub fn load() -> Result<Self> {
        let mut config = match default_config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_api_url_override(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        info!(path = %path.display(), api_url = %config.api_url, "Config loaded");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Replace the API URL when an override is given and non-blank.
    pub fn apply_api_url_override(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.map(|u| u.trim().to_string()) {
            if !url.is_empty() {
                debug!(api_url = %url, "API URL overridden");
                self.api_url = url;
            }
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn timeouts(&self) -> TimeoutConfig {
        TimeoutConfig::default().with_http_request(self.request_timeout())
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| data_dir().join("logs"))
    }

    pub fn session_file(&self) -> PathBuf {
        self.session_file
            .clone()
            .unwrap_or_else(|| data_dir().join(SESSION_FILE_NAME))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Per-user data directory, falling back to the working directory.
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_url": "https://api.tienda.co"}"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.api_url, "https://api.tienda.co");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.session_file.is_none());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            api_url: "http://10.0.0.2:9000".to_string(),
            request_timeout_secs: 5,
            log_dir: Some(dir.path().join("logs")),
            session_file: None,
        };

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
        assert_eq!(config.log_dir(), dir.path().join("logs"));
    }

    #[test]
    fn test_api_url_override() {
        let mut config = AppConfig::default();

        config.apply_api_url_override(Some("   ".to_string()));
        assert_eq!(config.api_url, DEFAULT_API_URL);

        config.apply_api_url_override(None);
        assert_eq!(config.api_url, DEFAULT_API_URL);

        config.apply_api_url_override(Some(" https://api.tienda.co ".to_string()));
        assert_eq!(config.api_url, "https://api.tienda.co");
    }
}
