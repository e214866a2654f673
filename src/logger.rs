//! Custom logging module.
//!
//! The terminal is in raw mode while the application runs, so log records
//! are captured into a bounded in-memory buffer and displayed by the log
//! panel instead of being printed.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of log entries kept for display.
///
pub const MAX_LOG_ENTRIES: usize = 500;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Shared ring of formatted log entries.
///
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    /// Append an entry, dropping the oldest one when full.
    ///
    pub fn push(&self, entry: String) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() >= MAX_LOG_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Return a copy of every entry, oldest first.
    ///
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Custom logger that captures logs to the log buffer
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }

    /// Install a logger writing into the buffer as the global logger.
    ///
    pub fn install(level: LevelFilter, buffer: LogBuffer) -> Result<(), log::SetLoggerError> {
        let logger = CustomLogger::new(level);
        logger.set_log_callback(Box::new(move |entry| buffer.push(entry)));
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Keep dependency chatter (hyper, reqwest) out of the panel
        metadata.level() <= self.level && metadata.target().starts_with("swj_tui")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_bounded() {
        let buffer = LogBuffer::default();
        for i in 0..MAX_LOG_ENTRIES + 5 {
            buffer.push(i.to_string());
        }
        let entries = buffer.entries();
        assert_eq!(entries.len(), MAX_LOG_ENTRIES);
        assert_eq!(entries[0], "5");
    }

    #[test]
    fn logger_forwards_enabled_records() {
        let buffer = LogBuffer::default();
        let logger = CustomLogger::new(LevelFilter::Info);
        let sink = buffer.clone();
        logger.set_log_callback(Box::new(move |entry| sink.push(entry)));

        logger.log(
            &Record::builder()
                .args(format_args!("Fetching ideas..."))
                .level(Level::Info)
                .target("swj_tui::events::network")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("too chatty"))
                .level(Level::Debug)
                .target("swj_tui::api")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("connection pooled"))
                .level(Level::Info)
                .target("hyper::client")
                .build(),
        );

        let entries = buffer.entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("INFO Fetching ideas..."));
    }
}
