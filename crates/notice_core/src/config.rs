//! Core runtime configuration.
//!
//! # Responsibility
//! - Describe where the notice database lives and how core logging runs.
//! - Turn that description into a ready connection / active logger.
//!
//! # Invariants
//! - Every field has a default, so `{}` is a complete configuration.
//! - No environment variables are consulted.

use crate::db::{open_db_in_memory, open_db_with, DbOptions, DbResult, DEFAULT_BUSY_TIMEOUT};
use crate::logging::{default_log_level, init_logging, LoggingError};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file path. `None` opens a private in-memory database.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Absolute directory for rolling log files. `None` leaves logging off.
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            log_dir: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid core config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CoreConfig {
    /// Parses a JSON configuration document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Opens (and migrates) the configured database.
    pub fn open_db(&self) -> DbResult<Connection> {
        match self.database.path.as_deref() {
            Some(path) => open_db_with(path, &self.database.db_options()),
            None => open_db_in_memory(),
        }
    }

    /// Starts file logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when logging is left off.
    pub fn init_logging(&self) -> Result<bool, LoggingError> {
        match self.logging.log_dir.as_deref() {
            Some(log_dir) => init_logging(&self.logging.level, log_dir).map(|()| true),
            None => Ok(false),
        }
    }
}

impl DatabaseConfig {
    pub fn db_options(&self) -> DbOptions {
        DbOptions {
            busy_timeout: Duration::from_millis(self.busy_timeout_ms),
        }
    }
}

fn default_busy_timeout_ms() -> u64 {
    u64::try_from(DEFAULT_BUSY_TIMEOUT.as_millis()).unwrap_or(u64::MAX)
}

fn default_level() -> String {
    default_log_level().to_string()
}
