//! Terminal logging.
//!
//! A single global [`Logger`] prints timestamped, prefixed lines to stderr
//! so that stdout stays clean for command output (tables, JSON). The same
//! logger is installed behind the `log` facade, which routes the core
//! crate's `log::debug!` lines through it.

use chrono::Local;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::error::ConfigError;

/// Log level for terminal display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// Filtering rank; success messages are shown whenever info is.
    fn rank(self) -> u8 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info | LogLevel::Success => 1,
            LogLevel::Warning => 2,
            LogLevel::Error => 3,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Debug => "🔍",
            LogLevel::Info => "  ",
            LogLevel::Success => "✓",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }

    fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info | LogLevel::Success => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" | "trace" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

/// A single log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth for grouped output
    pub indent: u8,
    /// HH:MM:SS
    pub timestamp: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            indent: 0,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Debug, message)
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = "   ".repeat(self.indent as usize);
        write!(
            f,
            "{} {}{} {}",
            self.timestamp,
            indent,
            self.level.prefix(),
            self.message
        )
    }
}

/// Global logger
pub static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new(LogLevel::Info));

/// Writes entries at or above a threshold to stderr
pub struct Logger {
    threshold: AtomicU8,
}

impl Logger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            threshold: AtomicU8::new(level.rank()),
        }
    }

    pub fn set_level(&self, level: LogLevel) {
        self.threshold.store(level.rank(), Ordering::Relaxed);
    }

    pub fn enabled_for(&self, level: LogLevel) -> bool {
        level.rank() >= self.threshold.load(Ordering::Relaxed)
    }

    /// Print an entry if its level passes the threshold
    pub fn emit(&self, entry: LogEntry) {
        if self.enabled_for(entry.level) {
            eprintln!("{}", entry);
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.enabled_for(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.emit(LogEntry::new(
                record.level().into(),
                format!("[{}] {}", record.target(), record.args()),
            ));
        }
    }

    fn flush(&self) {}
}

/// Set the threshold and route the `log` facade to [`LOGGER`].
///
/// Safe to call more than once; only the threshold changes after the first call.
pub fn init(level: LogLevel) {
    LOGGER.set_level(level);
    let _ = log::set_logger(&*LOGGER);
    log::set_max_level(level.to_filter());
}

pub fn log_info(msg: impl Into<String>) {
    LOGGER.emit(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    LOGGER.emit(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    LOGGER.emit(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    LOGGER.emit(LogEntry::error(msg));
}

pub fn log_debug(msg: impl Into<String>) {
    LOGGER.emit(LogEntry::debug(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LOGGER.emit(LogEntry::info(msg).with_indent(indent));
}
