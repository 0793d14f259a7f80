//! Structured JSON logger
//!
//! One log line is one event: `{"event":...,"severity":...,<fields>}`.
//! Lines are emitted synchronously with no buffering, and field keys
//! come out in deterministic (alphabetical) order. Everything goes to
//! stderr so command output on stdout stays machine-readable.

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Per-request detail
    Trace,
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
    /// Unrecoverable; the process exits after this line
    Fatal,
}

impl Severity {
    /// String form used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger.
///
/// Stateless; every method renders and writes one complete line.
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        let mut stderr = io::stderr();
        let _ = writeln!(stderr, "{}", line);
        let _ = stderr.flush();
    }

    /// Renders one event as a single JSON line.
    ///
    /// `serde_json`'s map keeps keys sorted, which gives deterministic
    /// output regardless of the order fields are passed in; `event` and
    /// `severity` are reserved keys and win over caller fields.
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut map = Map::new();
        for (key, value) in fields {
            map.insert((*key).to_string(), Value::String((*value).to_string()));
        }
        map.insert("event".to_string(), Value::String(event.to_string()));
        map.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );
        Value::Object(map).to_string()
    }

    /// Log at TRACE level
    pub fn trace(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Trace, event, fields);
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    /// Log at FATAL level
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Fatal, event, fields);
    }
}
