//! # Configuration State
//!
//! Application configuration resolved at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`RESTOCK_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex is
//! needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Path of the source catalog CSV, read on first start and on
    /// "reset from source".
    pub source_path: PathBuf,

    /// Explicit database path override. When unset the platform app-data
    /// directory is used.
    pub database_path: Option<PathBuf>,

    /// Discount preselected in the invoice view, whole percent.
    pub default_discount_percent: u8,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            source_path: PathBuf::from("Inventory.csv"),
            database_path: None,
            default_discount_percent: 0,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RESTOCK_SOURCE_PATH`: source catalog CSV path
    /// - `RESTOCK_DB_PATH`: database file path
    /// - `RESTOCK_DISCOUNT`: default discount in whole percent
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(path) = std::env::var("RESTOCK_SOURCE_PATH") {
            config.source_path = PathBuf::from(path);
        }

        if let Ok(path) = std::env::var("RESTOCK_DB_PATH") {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Ok(raw) = std::env::var("RESTOCK_DISCOUNT") {
            if let Ok(pct) = raw.parse::<i64>() {
                config.default_discount_percent = pct.clamp(0, 100) as u8;
            }
        }

        config
    }

    /// Resolves the database file path.
    ///
    /// Uses the explicit override when set, otherwise the platform
    /// app-data directory (created on demand):
    /// - macOS: `~/Library/Application Support/com.restock.app/restock.db`
    /// - Windows: `%APPDATA%\restock\app\restock.db`
    /// - Linux: `~/.local/share/restock-app/restock.db`
    pub fn resolve_database_path(&self) -> Result<PathBuf, std::io::Error> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let proj_dirs = ProjectDirs::from("com", "restock", "app").ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine app data directory",
            )
        })?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;
        Ok(data_dir.join("restock.db"))
    }
}
