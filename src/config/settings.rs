//! User settings for the expenditure tracker
//!
//! Manages display and logging preferences. Settings are optional: a missing
//! file yields the defaults.

use serde::{Deserialize, Serialize};

use super::paths::ExpenditurePaths;
use crate::error::ExpenditureError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency label shown next to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default tracing filter directive (overridden by `RUST_LOG`)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Event poll tick rate for the TUI, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Ksh".to_string()
}

fn default_log_filter() -> String {
    "expenditure=info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            log_filter: default_log_filter(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &ExpenditurePaths) -> Result<Self, ExpenditureError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenditureError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            ExpenditureError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpenditurePaths) -> Result<(), ExpenditureError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenditureError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenditureError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the TUI cannot work with
    pub fn validate(&self) -> Result<(), ExpenditureError> {
        if self.tick_rate_ms == 0 {
            return Err(ExpenditureError::Config(
                "tick_rate_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
