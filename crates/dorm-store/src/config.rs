//! Store configuration
//!
//! Credentials and identifiers come from an externally-managed JSON blob;
//! provisioning and refreshing the access token is out of scope here. The
//! token can be overridden through `DORM_BOARD_TOKEN` so the config file on
//! disk never has to hold a live credential.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the configured access token
pub const TOKEN_ENV: &str = "DORM_BOARD_TOKEN";

fn default_api_base() -> String {
    "https://sheets.googleapis.com".to_string()
}

/// Connection settings for the spreadsheet backing store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Sheets API base URL (override for proxies and tests)
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Spreadsheet key holding one sheet per building-floor
    pub spreadsheet_id: String,
    /// OAuth bearer token for the service account
    #[serde(default)]
    pub access_token: String,
}

impl StoreConfig {
    /// Load configuration from a JSON file, applying the env token override
    ///
    /// # Errors
    /// I/O failure reading the file, or malformed JSON.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            config.access_token = token;
        }
        Ok(config)
    }
}

/// Configuration loading failure
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not read the config file
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`StoreConfig`]
    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
