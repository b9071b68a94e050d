//! Path management for the expenditure tracker
//!
//! Only settings and the log file live on disk; the ledger itself is never
//! written anywhere.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENDITURE_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/expenditure` on Linux, `%APPDATA%\expenditure` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpenditureError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EXPENDITURE_DATA_DIR";

/// Manages all paths used by the expenditure tracker
#[derive(Debug, Clone)]
pub struct ExpenditurePaths {
    base_dir: PathBuf,
}

impl ExpenditurePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ExpenditureError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("expenditure.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenditureError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            ExpenditureError::Io(format!("Failed to create base directory: {}", e))
        })?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpenditureError> {
    ProjectDirs::from("", "", "expenditure")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ExpenditureError::Config("Could not determine home directory".into()))
}
