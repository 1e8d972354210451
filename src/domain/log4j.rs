//! Destination-side model: log4j levels, logger handles and logging events.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::jul::Thrown;
use crate::error::BridgeError;

/// log4j severity, ordered by integer value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Log4jLevel {
    Off,
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    All,
    Custom { name: String, value: i32 },
}

impl Log4jLevel {
    pub const STANDARD: [Log4jLevel; 8] = [
        Log4jLevel::Off,
        Log4jLevel::Fatal,
        Log4jLevel::Error,
        Log4jLevel::Warn,
        Log4jLevel::Info,
        Log4jLevel::Debug,
        Log4jLevel::Trace,
        Log4jLevel::All,
    ];

    pub fn custom(name: impl Into<String>, value: i32) -> Self {
        Log4jLevel::Custom {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Log4jLevel::Off => "OFF",
            Log4jLevel::Fatal => "FATAL",
            Log4jLevel::Error => "ERROR",
            Log4jLevel::Warn => "WARN",
            Log4jLevel::Info => "INFO",
            Log4jLevel::Debug => "DEBUG",
            Log4jLevel::Trace => "TRACE",
            Log4jLevel::All => "ALL",
            Log4jLevel::Custom { name, .. } => name,
        }
    }

    pub fn int_value(&self) -> i32 {
        match self {
            Log4jLevel::Off => i32::MAX,
            Log4jLevel::Fatal => 50_000,
            Log4jLevel::Error => 40_000,
            Log4jLevel::Warn => 30_000,
            Log4jLevel::Info => 20_000,
            Log4jLevel::Debug => 10_000,
            Log4jLevel::Trace => 5_000,
            Log4jLevel::All => i32::MIN,
            Log4jLevel::Custom { value, .. } => *value,
        }
    }

    /// Standard level carrying the same integer value, if any.
    pub fn standard_equivalent(&self) -> Option<Log4jLevel> {
        let value = self.int_value();
        Self::STANDARD
            .into_iter()
            .find(|level| level.int_value() == value)
    }
}

impl PartialOrd for Log4jLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.int_value().cmp(&other.int_value()) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Log4jLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Log4jLevel {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::STANDARD
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BridgeError::UnknownLevel(s.to_string()))
    }
}

impl Serialize for Log4jLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Handle to a named logger owned by a `LoggerRepository`.
#[derive(Debug, PartialEq, Eq)]
pub struct Logger {
    name: String,
}

impl Logger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Where a log call originated. Parts the source did not supply hold a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationInfo {
    pub file_name: String,
    pub class_name: String,
    pub method_name: String,
    pub line_number: String,
}

impl LocationInfo {
    pub fn new(
        file_name: impl Into<String>,
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        line_number: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            class_name: class_name.into(),
            method_name: method_name.into(),
            line_number: line_number.into(),
        }
    }

    /// `class.method(file:line)`
    pub fn full_info(&self) -> String {
        format!(
            "{}.{}({}:{})",
            self.class_name, self.method_name, self.file_name, self.line_number
        )
    }
}

/// Error attached to an event, kept as the exact value the record carried.
#[derive(Clone)]
pub struct ThrowableInformation {
    throwable: Thrown,
}

impl ThrowableInformation {
    pub fn new(throwable: Thrown) -> Self {
        Self { throwable }
    }

    pub fn throwable(&self) -> &Thrown {
        &self.throwable
    }

    /// The error followed by its `source()` chain, one line each.
    pub fn throwable_str_rep(&self) -> Vec<String> {
        let mut lines = vec![self.throwable.to_string()];
        let mut cause = self.throwable.source();
        while let Some(err) = cause {
            lines.push(format!("Caused by: {err}"));
            cause = err.source();
        }
        lines
    }
}

impl fmt::Debug for ThrowableInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ThrowableInformation")
            .field(&self.throwable_str_rep())
            .finish()
    }
}

impl Serialize for ThrowableInformation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.throwable_str_rep().serialize(serializer)
    }
}

/// A log4j `LoggingEvent` produced by the bridge.
#[derive(Debug, Clone, Serialize)]
pub struct LoggingEvent {
    pub logger_name: String,
    #[serde(skip)]
    pub logger: Arc<Logger>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub level: Log4jLevel,
    pub message: String,
    pub thread_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throwable_info: Option<ThrowableInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ndc: Option<String>,
    pub location_info: LocationInfo,
    pub properties: HashMap<String, String>,
}

impl LoggingEvent {
    /// Message as appenders see it. The bridge never formats, so this is the raw message.
    pub fn rendered_message(&self) -> &str {
        &self.message
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}
