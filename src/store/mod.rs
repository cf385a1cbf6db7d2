// Record export loading and configuration

use crate::models::PaymentRequest;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not determine home directory")]
    NoHome,
    #[error("Failed to read export: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse export: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration directory (`~/.payreq`)
pub fn config_dir() -> Result<PathBuf, StoreError> {
    // HOME first so tests and shells can redirect it; dirs as the
    // cross-platform fallback
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home).join(".payreq"));
    }
    dirs::home_dir()
        .map(|home| home.join(".payreq"))
        .ok_or(StoreError::NoHome)
}

/// Read a `key=value` entry from the config file, if present
pub fn config_value(key: &str) -> Option<String> {
    let config_path = config_dir().ok()?.join("rc");
    let config = std::fs::read_to_string(config_path).ok()?;
    let prefix = format!("{}=", key);
    for line in config.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix(&prefix) {
            return Some(value.trim().to_string());
        }
    }
    None
}

/// Record export manager
pub struct RequestStore;

impl RequestStore {
    /// Get the default export path
    pub fn default_path() -> Result<PathBuf, StoreError> {
        Ok(config_dir()?.join("requests.json"))
    }

    /// Get the export path from the config file or default
    pub fn resolve_path() -> Result<PathBuf, StoreError> {
        if let Some(location) = config_value("data.location") {
            let path = PathBuf::from(location);
            // If path is relative, resolve relative to the config directory
            if path.is_relative() {
                return Ok(config_dir()?.join(path));
            }
            return Ok(path);
        }
        Self::default_path()
    }

    /// Load records from the configured export location
    pub fn load() -> Result<Vec<PaymentRequest>, StoreError> {
        Self::load_from(&Self::resolve_path()?)
    }

    /// Load records from an explicit export file
    pub fn load_from(path: &Path) -> Result<Vec<PaymentRequest>, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<PaymentRequest> =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }
}
