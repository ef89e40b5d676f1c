use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::{config_file, ensure_dir};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown config key `{0}`")]
    UnknownKey(String),
    #[error("Invalid value for `{key}`: {value}")]
    InvalidValue { key: String, value: String },
}

/// Settings for the shell and the conversion boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Currency expense amounts are recorded in.
    pub currency: String,
    /// Currency conversions produce.
    pub target_currency: String,
    pub rate_endpoint: String,
    pub rate_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "BRL".into(),
            target_currency: "USD".into(),
            rate_endpoint: "https://api.exchangerate-api.com/v4/latest/BRL".into(),
            rate_timeout_secs: 5,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 4] = ["currency", "target", "endpoint", "timeout"];

    pub fn rate_timeout(&self) -> Duration {
        Duration::from_secs(self.rate_timeout_secs)
    }

    /// Updates one setting by its short key name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "currency" | "target" => {
                let code = value.trim();
                if code.len() != 3 || !code.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    return Err(invalid());
                }
                let code = code.to_ascii_uppercase();
                if key == "currency" {
                    self.currency = code;
                } else {
                    self.target_currency = code;
                }
            }
            "endpoint" => {
                let url = value.trim();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(invalid());
                }
                self.rate_endpoint = url.to_string();
            }
            "timeout" => {
                let secs: u64 = value.trim().parse().map_err(|_| invalid())?;
                if secs == 0 {
                    return Err(invalid());
                }
                self.rate_timeout_secs = secs;
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

/// Loads and saves a [`Config`] as pretty JSON.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager for `<app data dir>/config.json`.
    pub fn new() -> Self {
        Self::with_path(config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("config.json"));
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("nested").join("config.json"));
        let mut config = Config::default();
        config.set("target", "eur").unwrap();
        config.set("timeout", "12").unwrap();
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.target_currency, "EUR");
        assert_eq!(loaded.rate_timeout(), Duration::from_secs(12));
        assert!(!manager.path().with_extension(TMP_SUFFIX).exists());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"target_currency":"GBP"}"#).unwrap();
        let loaded = ConfigManager::with_path(&path).load().unwrap();
        assert_eq!(loaded.target_currency, "GBP");
        assert_eq!(loaded.currency, "BRL");
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("timeout", "0"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("endpoint", "ftp://rates"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("colour", "blue"),
            Err(ConfigError::UnknownKey(_))
        ));
    }
}
