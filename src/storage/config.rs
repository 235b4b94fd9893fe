//! Configuration management
//!
//! Default request options stored in `~/.config/percolate-client/config.toml`.
//! Priority: CLI argument > PERCOLATE_REQUEST_TIMEOUT_MS environment variable > config.toml

use super::Result;
use crate::api::params::{Ignore, Options};
use crate::error::StorageError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const TIMEOUT_ENV_VAR: &str = "PERCOLATE_REQUEST_TIMEOUT_MS";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub request_timeout_ms: Option<u64>,
    pub max_retries: Option<u32>,
    #[serde(default)]
    pub compression: bool,
    /// Status codes the dispatcher should not treat as errors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<u16>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, String>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = home_dir.join(".config").join("percolate-client");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    /// Request timeout with fallback to environment variable
    pub fn get_request_timeout(&self) -> Option<Duration> {
        self.request_timeout_with_env(std::env::var(TIMEOUT_ENV_VAR).ok())
    }

    fn request_timeout_with_env(&self, env_value: Option<String>) -> Option<Duration> {
        let from_env = env_value.and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(_) => {
                log::warn!("Ignoring {}={:?}: not a number", TIMEOUT_ENV_VAR, raw);
                None
            }
        });
        from_env
            .or(self.request_timeout_ms)
            .map(Duration::from_millis)
    }

    /// Base [`Options`] for every call
    pub fn to_options(&self) -> Options {
        let headers = if self.headers.is_empty() {
            None
        } else {
            let map: Map<String, Value> = self
                .headers
                .iter()
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect();
            Some(Value::Object(map))
        };

        Options {
            headers,
            ignore: if self.ignore.is_empty() {
                None
            } else {
                Some(Ignore::Statuses(self.ignore.clone()))
            },
            request_timeout: self.get_request_timeout(),
            max_retries: self.max_retries,
            compression: self.compression,
            ..Default::default()
        }
    }
}
