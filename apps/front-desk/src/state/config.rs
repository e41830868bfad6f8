//! # Configuration State
//!
//! Desk configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CIRC_*`)
//! 2. JSON config file (path in `CIRC_CONFIG_FILE`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

/// Path of an optional JSON config file.
pub const ENV_CONFIG_FILE: &str = "CIRC_CONFIG_FILE";
/// Overrides [`DeskConfig::library_name`].
pub const ENV_LIBRARY_NAME: &str = "CIRC_LIBRARY_NAME";
/// Overrides [`DeskConfig::catalog_path`].
pub const ENV_CATALOG_PATH: &str = "CIRC_CATALOG_PATH";
/// Overrides [`DeskConfig::log_filter`].
pub const ENV_LOG_FILTER: &str = "CIRC_LOG_FILTER";

/// Front desk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeskConfig {
    /// Branch name, used in log lines.
    pub library_name: String,

    /// Tab-delimited catalog to load at startup.
    /// `None` starts the desk with an empty catalog.
    pub catalog_path: Option<PathBuf>,

    /// `tracing-subscriber` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        DeskConfig {
            library_name: "Main Branch".to_string(),
            catalog_path: None,
            log_filter: "info,circulation_core=debug,front_desk=debug".to_string(),
        }
    }
}

impl DeskConfig {
    /// Builds the configuration from any key lookup. At startup the lookup
    /// is the process environment (see [`crate::bootstrap`]); tests pass a
    /// map so they don't have to mutate it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG_FILE) {
            Some(path) => Self::from_file(path)?,
            None => DeskConfig::default(),
        };

        if let Some(name) = lookup(ENV_LIBRARY_NAME) {
            config.library_name = name;
        }

        if let Some(path) = lookup(ENV_CATALOG_PATH) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(filter) = lookup(ENV_LOG_FILTER) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Reads a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading desk config");

        let text = std::fs::read_to_string(path)
            .map_err(|e| ApiError::config(format!("Cannot read {}: {e}", path.display())))?;

        serde_json::from_str(&text)
            .map_err(|e| ApiError::config(format!("Invalid config {}: {e}", path.display())))
    }
}
