//! Settings file for the scanner, stored as TOML in the platform config dir.

use anyhow::{Context, Result};
use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV: &str = "RECYCLE_SCAN_ENDPOINT";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub client: ClientConfig,
}

/// Settings for talking to the classification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub max_upload_bytes: u64,
    /// Request timeout; `None` keeps the HTTP client's own default.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000/predict".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            timeout_secs: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("config not readable: {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config: {}", path.display()))
    }

    /// Location of `config.toml`, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("app", "RecycleScan", "RecycleScan")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load the default config file when present, then apply env overrides.
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(Self::default_path().as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Like [`AppConfig::load_or_default`] with an explicit file and variable
    /// lookup. A broken file falls back to defaults; overrides always apply.
    pub fn load_or_default_from<F>(path: Option<&Path>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) if path.exists() => match Self::load(path) {
                Ok(config) => {
                    tracing::info!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("config ignored, using defaults: {e:#}");
                    Self::default()
                }
            },
            _ => Self::default(),
        };
        config.apply_env_overrides(lookup);
        config
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            tracing::debug!("endpoint overridden by {ENDPOINT_ENV}");
            self.client.endpoint = endpoint.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn partial_file_keeps_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[client]\nendpoint = \"https://scan.example.org/api/predict\"\n",
        )?;
        let config = AppConfig::load(&path)?;
        assert_eq!(config.client.endpoint, "https://scan.example.org/api/predict");
        assert_eq!(config.client.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.client.timeout_secs, None);
        Ok(())
    }

    #[test]
    fn invalid_toml_is_reported() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[client\nendpoint = 3")?;
        let err = AppConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("invalid config"));
        Ok(())
    }

    #[test]
    fn broken_file_still_gets_env_override() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[client\nendpoint = ")?;
        let config = AppConfig::load_or_default_from(Some(&path), |key| {
            (key == ENDPOINT_ENV).then(|| "http://10.0.0.9:1/predict".to_string())
        });
        assert_eq!(config.client.endpoint, "http://10.0.0.9:1/predict");
        assert_eq!(config.client.max_upload_bytes, 10 * 1024 * 1024);
        Ok(())
    }

    #[test]
    fn valid_file_is_loaded_before_override() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[client]\nmax_upload_bytes = 2048\ntimeout_secs = 5\n")?;
        let config = AppConfig::load_or_default_from(Some(&path), |key| {
            (key == ENDPOINT_ENV).then(|| "https://scan.example.org/predict".to_string())
        });
        assert_eq!(config.client.endpoint, "https://scan.example.org/predict");
        assert_eq!(config.client.max_upload_bytes, 2048);
        assert_eq!(config.client.timeout_secs, Some(5));
        Ok(())
    }

    #[test]
    fn missing_file_gives_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config =
            AppConfig::load_or_default_from(Some(&dir.path().join(CONFIG_FILE)), |_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(AppConfig::load_or_default_from(None, |_| None), AppConfig::default());
        Ok(())
    }

    #[test]
    fn env_override_replaces_endpoint() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| {
            (key == ENDPOINT_ENV).then(|| " http://10.0.0.2:9000/predict ".to_string())
        });
        assert_eq!(config.client.endpoint, "http://10.0.0.2:9000/predict");
    }

    #[test]
    fn blank_env_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(|_| Some("   ".to_string()));
        assert_eq!(config.client, ClientConfig::default());
    }
}
