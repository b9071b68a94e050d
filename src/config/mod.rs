//! Configuration module for the expenditure tracker
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - Logging initialization

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::ExpenditurePaths;
pub use settings::Settings;
