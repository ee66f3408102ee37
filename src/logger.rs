use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Maximum number of lines kept for the logs dialog
const MAX_LOG_LINES: usize = 500;

/// Shared logger that can be used across the application.
///
/// Lines are kept in memory for the logs dialog and forwarded to the `log`
/// facade. When file logging is enabled, `fern` writes the facade's records
/// to the log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_logging: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_logging: false,
        }
    }

    /// Build a logger, installing the file dispatcher when enabled.
    pub fn from_config(enabled: bool) -> Result<Self> {
        let mut logger = Self::new();
        if enabled {
            let path = Self::get_log_file_path()?;
            Self::init_file_dispatch(&path)?;
            logger.file_logging = true;
        }
        Ok(logger)
    }

    fn init_file_dispatch(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} {} [{}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Debug)
            .level_for("reqwest", log::LevelFilter::Warn)
            .level_for("hyper", log::LevelFilter::Warn)
            .chain(file);

        // A second install in the same process (tests) keeps the first one.
        if dispatch.apply().is_err() {
            log::debug!("Logger: file dispatcher already installed");
        }
        Ok(())
    }

    /// Location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("buscadoc").join("buscadoc.log"))
    }

    pub fn is_enabled(&self) -> bool {
        self.file_logging
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{}", message);
        self.push(message);
    }

    /// Add a warning entry
    pub fn warn(&self, message: String) {
        log::warn!("{}", message);
        self.push(format!("WARN {}", message));
    }

    fn push(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_LOG_LINES {
                let overflow = logs.len() - MAX_LOG_LINES;
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
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
