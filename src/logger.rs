use crate::constants::MAX_IN_MEMORY_LOGS;
use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;
use once_cell::sync::OnceCell;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

type FileWriter = Arc<Mutex<BufWriter<File>>>;

/// Global `log` dispatcher; installed at most once per process
static FACADE: OnceCell<()> = OnceCell::new();

/// Shared logger that can be used across the application
///
/// Entries are always kept in memory for the logs dialog. With logging
/// enabled they are also appended to `marketdesk.log` in the data directory.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
    file_writer: Option<FileWriter>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
            file_writer: None,
        }
    }

    /// Build from `[logging] enabled`
    pub fn from_config(enabled: bool) -> Result<Self> {
        let mut logger = Self::new();
        if enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            logger.enabled = true;
            logger.file_writer = Some(Arc::new(Mutex::new(BufWriter::new(file))));
        }
        Ok(logger)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }

    /// `$XDG_DATA_HOME/marketdesk/marketdesk.log`
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("marketdesk").join("marketdesk.log"))
    }

    /// Route the `log` macros into this logger. Only the first call in a
    /// process installs the dispatcher; later calls are no-ops.
    pub fn install_facade(&self, level: LevelFilter) -> Result<()> {
        let sink = self.clone();
        FACADE
            .get_or_try_init(|| {
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!("{:<5} {}: {}", record.level(), record.target(), message))
                    })
                    .level(level)
                    .chain(fern::Output::call(move |record| sink.log(record.args().to_string())))
                    .apply()
            })
            .context("Failed to install log dispatcher")?;
        Ok(())
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writeln!(writer, "{}", formatted_message);
                let _ = writer.flush();
            }
        }

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_IN_MEMORY_LOGS {
                let overflow = logs.len() - MAX_IN_MEMORY_LOGS;
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

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.enabled)
            .field("has_file_writer", &self.has_file_writer())
            .finish()
    }
}
