//! In-memory site logger
//!
//! Chronological, leveled audit trail of application events. Entries live in a
//! bounded ring buffer shared by every clone of a [`SiteLogger`]; in
//! development mode each entry is also mirrored to the console.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::errors::SharedError;

/// Default number of entries retained before the oldest are evicted
pub const DEFAULT_LOG_CAPACITY: usize = 1000;

const ANSI_RESET: &str = "\x1b[0m";
const DATA_STYLE: &str = "\x1b[3;38;2;113;128;150m";

/// Process-wide logger - created on first access
static GLOBAL_LOGGER: OnceLock<SiteLogger> = OnceLock::new();

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Debug => "debug",
        }
    }

    /// Upper-case label used in console lines
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Bold truecolor escape for the level's console line
    pub fn ansi_style(&self) -> &'static str {
        match self {
            LogLevel::Info => "\x1b[1;38;2;49;130;206m",
            LogLevel::Warn => "\x1b[1;38;2;221;107;32m",
            LogLevel::Error => "\x1b[1;38;2;229;62;62m",
            LogLevel::Debug => "\x1b[1;38;2;128;90;213m",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(SharedError::UnknownLogLevel { input: s.to_string() }),
        }
    }
}

/// A single recorded event. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            level,
            message: message.into(),
            data,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// `[<timestamp>] <LEVEL>: <message>`
    pub fn console_line(&self) -> String {
        format!("[{}] {}: {}", self.timestamp, self.level.label(), self.message)
    }

    /// Second console line carrying the payload, if there is one worth showing
    pub fn data_line(&self) -> Option<String> {
        self.data
            .as_ref()
            .filter(|data| !data.is_null())
            .map(|data| format!("Data: {data}"))
    }
}

/// Destination for development-mode console mirroring
#[mockall::automock]
pub trait ConsoleMirror: Send + Sync {
    fn emit(&self, entry: &LogEntry);
}

/// Writes styled lines to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrMirror;

impl ConsoleMirror for StderrMirror {
    fn emit(&self, entry: &LogEntry) {
        eprintln!("{}{}{}", entry.level.ansi_style(), entry.console_line(), ANSI_RESET);
        if let Some(line) = entry.data_line() {
            eprintln!("{DATA_STYLE}{line}{ANSI_RESET}");
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Mirror to the console and record debug entries
    pub dev_mode: bool,
    /// Maximum retained entries
    pub capacity: usize,
}

impl LoggerConfig {
    pub fn development() -> Self {
        Self { dev_mode: true, capacity: DEFAULT_LOG_CAPACITY }
    }

    pub fn production() -> Self {
        Self { dev_mode: false, capacity: DEFAULT_LOG_CAPACITY }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for LoggerConfig {
    /// Development mode follows the build profile
    fn default() -> Self {
        Self {
            dev_mode: cfg!(debug_assertions),
            capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

struct LoggerInner {
    config: LoggerConfig,
    entries: Mutex<VecDeque<LogEntry>>,
    mirror: Box<dyn ConsoleMirror>,
}

/// Shared handle to one log sequence. Clones observe and mutate the same entries.
#[derive(Clone)]
pub struct SiteLogger {
    inner: Arc<LoggerInner>,
}

impl SiteLogger {
    /// Create a logger mirroring to stderr
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_mirror(config, Box::new(StderrMirror))
    }

    pub fn with_mirror(config: LoggerConfig, mirror: Box<dyn ConsoleMirror>) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            inner: Arc::new(LoggerInner {
                config: LoggerConfig { capacity, ..config },
                entries: Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_LOG_CAPACITY))),
                mirror,
            }),
        }
    }

    /// Initialize the process-wide logger. Later calls return the existing instance
    /// and ignore `config`.
    pub fn init_global(config: LoggerConfig) -> &'static SiteLogger {
        GLOBAL_LOGGER.get_or_init(|| SiteLogger::new(config))
    }

    /// Process-wide logger, created with the default configuration on first access
    pub fn global() -> &'static SiteLogger {
        GLOBAL_LOGGER.get_or_init(|| SiteLogger::new(LoggerConfig::default()))
    }

    /// Same handle as [`SiteLogger::global`]
    pub fn get_instance() -> &'static SiteLogger {
        Self::global()
    }

    pub fn is_development(&self) -> bool {
        self.inner.config.dev_mode
    }

    pub fn capacity(&self) -> usize {
        self.inner.config.capacity
    }

    /// True when both handles append to the same sequence
    pub fn shares_log_with(&self, other: &SiteLogger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Append an entry stamped with the current time
    pub fn log(&self, level: LogLevel, message: impl Into<String>, data: Option<Value>) {
        let entry = LogEntry::new(level, message, data);

        if self.inner.config.dev_mode {
            self.inner.mirror.emit(&entry);
        }

        let mut entries = self.entries();
        entries.push_back(entry);
        while entries.len() > self.inner.config.capacity {
            entries.pop_front();
        }
    }

    pub fn info(&self, message: impl Into<String>, data: Option<Value>) {
        self.log(LogLevel::Info, message, data);
    }

    pub fn warn(&self, message: impl Into<String>, data: Option<Value>) {
        self.log(LogLevel::Warn, message, data);
    }

    pub fn error(&self, message: impl Into<String>, data: Option<Value>) {
        self.log(LogLevel::Error, message, data);
    }

    /// Recorded in development mode only; `get_logs` never sees these in production
    pub fn debug(&self, message: impl Into<String>, data: Option<Value>) {
        if self.inner.config.dev_mode {
            self.log(LogLevel::Debug, message, data);
        }
    }

    /// Snapshot of the current sequence, oldest first
    pub fn get_logs(&self) -> Vec<LogEntry> {
        self.entries().iter().cloned().collect()
    }

    pub fn clear_logs(&self) {
        self.entries().clear();
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.inner.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SiteLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteLogger")
            .field("config", &self.inner.config)
            .field("entries", &self.len())
            .finish()
    }
}
