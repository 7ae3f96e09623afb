//! Logging setup.
//!
//! Every module logs through the `log` macros. [`Logger::init`] installs a
//! `fern` dispatch that feeds two sinks: an in-memory buffer shown in the
//! logs dialog, and a log file when logging is enabled in the config.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Entries kept in memory before the oldest are dropped.
pub const MAX_LOG_ENTRIES: usize = 1000;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
    file_path: Option<PathBuf>,
}

impl Logger {
    /// In-memory only logger.
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
            file_path: None,
        }
    }

    /// Build a logger from the logging section of the config. When logging
    /// is enabled the log file directory is created up front.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let logger = Self::new();
        if !config.enabled {
            return Ok(logger);
        }
        let path = Self::get_log_file_path()?;
        logger.with_file(path)
    }

    /// Also write to `path`.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        self.file_path = Some(path);
        Ok(self)
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Default log file location under the XDG data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("exoview").join("exoview.log"))
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push_back(formatted_message);
            while logs.len() > self.capacity {
                logs.pop_front();
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Build the dispatch without installing it.
    pub fn dispatch(&self, level: LevelFilter) -> Result<fern::Dispatch> {
        let buffer = self.clone();
        let memory = fern::Dispatch::new()
            .format(|out, message, record| out.finish(format_args!("{:<5} {}", record.level(), message)))
            .chain(fern::Output::call(move |record| buffer.log(record.args().to_string())));

        let mut dispatch = fern::Dispatch::new()
            .level(level)
            .level_for("hyper", LevelFilter::Warn)
            .level_for("reqwest", LevelFilter::Warn)
            .level_for("rustls", LevelFilter::Warn)
            .chain(memory);

        if let Some(path) = &self.file_path {
            let file = fern::log_file(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{} {:<5} {}] {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
        }
        Ok(dispatch)
    }

    /// Install this logger as the global `log` backend.
    pub fn init(&self, level: LevelFilter) -> Result<()> {
        self.dispatch(level)?
            .apply()
            .context("Failed to install logger")?;
        log::info!("logger: initialized at level {}", level);
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
