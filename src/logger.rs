use anyhow::{Context, Result};
use chrono::{Local, Utc};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::constants::LOG_FILE_NAME;

/// Maximum number of entries kept in memory
const MAX_LOG_ENTRIES: usize = 500;

/// Shared logger that can be used across the application.
///
/// Entries are kept in memory for the logs overlay and also forwarded to the
/// `log` facade, which writes them to the log file when file logging is on.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::debug!("{}", message);

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_LOG_ENTRIES {
                let overflow = logs.len() - MAX_LOG_ENTRIES;
                logs.drain(..overflow);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
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
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the log file inside `data_dir`
pub fn log_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE_NAME)
}

/// Route the `log` facade to a file. Can only be installed once per process.
pub fn init_file_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .level_for("reqwest", log::LevelFilter::Warn)
        .level_for("hyper", log::LevelFilter::Warn)
        .chain(file)
        .apply()
        .context("Failed to install logger")?;

    Ok(())
}
