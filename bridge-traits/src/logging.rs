//! Host Logging Abstractions
//!
//! Structured log forwarding into the host's own logging pipeline
//! (Logcat/OSLog-style). The bridge logs through `tracing`; a `LoggerSink`
//! mirrors events that survive filtering into the host logger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Structured log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: DateTime<Utc>,
    /// Target module/component
    pub target: String,
    pub message: String,
    /// Structured fields recorded on the event
    pub fields: HashMap<String, String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            target: target.into(),
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// Logger sink trait
///
/// Implementations should ensure no credentials leak into host logs and that
/// levels respect debug/release build configurations.
pub trait LoggerSink: Send + Sync {
    /// Forward one structured entry to the host logger.
    fn log(&self, entry: LogEntry);

    /// Minimum level the sink cares about; entries below it are skipped
    /// before construction.
    fn min_level(&self) -> LogLevel {
        LogLevel::Debug
    }
}

/// Sink that prints entries to stderr. Useful in tests and CLI harnesses.
#[derive(Debug, Clone, Default)]
pub struct ConsoleLogger;

impl LoggerSink for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        eprintln!(
            "[{:?}] {} {} {:?}",
            entry.level, entry.target, entry.message, entry.fields
        );
    }
}
