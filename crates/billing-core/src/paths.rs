//! File system paths for the application.

use crate::{CoreError, CoreResult};
use std::path::PathBuf;

/// Manages file system paths for the application.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Base directory for application files (~/.billing)
    base_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance rooted at `~/.billing`.
    pub fn new() -> CoreResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::Path("Could not determine home directory".to_string()))?;

        Ok(Self {
            base_dir: home.join(".billing"),
        })
    }

    /// Create a new Paths instance with a custom base directory.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.billing).
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config file path (~/.billing/config.json).
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the encrypted database file path (~/.billing/billing.db).
    pub fn database_file(&self) -> PathBuf {
        self.base_dir.join("billing.db")
    }

    /// Get the logs directory (~/.billing/logs).
    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Get the log file path (~/.billing/logs/billing.log).
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join("billing.log")
    }

    /// Ensure all required directories exist.
    pub fn ensure_dirs(&self) -> CoreResult<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().expect("Failed to determine home directory")
    }
}
