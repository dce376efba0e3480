//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a bounded ring
//! buffer and forwards every record to the browser console (or stderr when
//! not running on wasm).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Logger installation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
}

/// Ring buffer of formatted log lines
pub struct RollingLogger {
    capacity: usize,
    level: LevelFilter,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            capacity: capacity.max(1),
            level,
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear_lines(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the rolling logger as the global `log` backend
pub fn init_logger(capacity: usize, level: LevelFilter) -> Result<(), LoggerError> {
    let mut fresh = false;
    let logger = LOGGER.get_or_init(|| {
        fresh = true;
        RollingLogger::new(capacity, level)
    });
    if !fresh {
        return Err(LoggerError::AlreadyInitialized);
    }
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(level);
    Ok(())
}

/// Most recent records of the installed logger
pub fn recent() -> Vec<String> {
    LOGGER.get().map(RollingLogger::lines).unwrap_or_default()
}

pub fn clear() {
    if let Some(logger) = LOGGER.get() {
        logger.clear_lines();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_evicts_oldest() {
        let logger = RollingLogger::new(3, LevelFilter::Debug);
        for i in 0..5 {
            logger.push(format!("line {}", i));
        }
        assert_eq!(logger.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let logger = RollingLogger::new(0, LevelFilter::Info);
        logger.push("a".to_string());
        logger.push("b".to_string());
        assert_eq!(logger.lines(), vec!["b"]);
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(10, LevelFilter::Warn);
        logger.log(&Record::builder().level(Level::Info).args(format_args!("skipped")).build());
        logger.log(&Record::builder().level(Level::Error).args(format_args!("kept")).build());
        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("kept"));
        assert!(lines[0].contains("ERROR"));
    }

    #[test]
    fn test_init_twice_fails() {
        assert!(init_logger(8, LevelFilter::Info).is_ok());
        log::info!("hello");
        assert!(recent().iter().any(|l| l.ends_with("hello")));
        let err = init_logger(8, LevelFilter::Info).unwrap_err();
        assert_eq!(err, LoggerError::AlreadyInitialized);
        assert_eq!(err.to_string(), "logger already initialized");
        clear();
        assert!(recent().is_empty());
    }
}
