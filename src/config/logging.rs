//! Tracing setup
//!
//! The terminal belongs to the TUI while it runs, so log output goes to a file
//! next to the settings rather than to stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use super::paths::ExpenditurePaths;
use super::settings::Settings;
use crate::error::{ExpenditureError, ExpenditureResult};

/// Build the log filter: `RUST_LOG` wins, otherwise the configured directive
pub fn build_filter(settings: &Settings) -> ExpenditureResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&settings.log_filter).map_err(|e| {
        ExpenditureError::Config(format!("Invalid log filter '{}': {}", settings.log_filter, e))
    })
}

/// Install the global tracing subscriber writing to the log file
pub fn init_tracing(paths: &ExpenditurePaths, settings: &Settings) -> ExpenditureResult<()> {
    paths.ensure_directories()?;

    let log_path = paths.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| ExpenditureError::Io(format!("Failed to open log file: {}", e)))?;

    fmt()
        .with_env_filter(build_filter(settings)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| ExpenditureError::Config(format!("Failed to install logger: {}", e)))?;

    tracing::info!(log = %log_path.display(), "tracing initialized");
    Ok(())
}
