//! Source-side model: `java.util.logging` levels and log records.

use chrono::Utc;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering as AtomicOrdering};

use crate::error::BridgeError;

/// Error object attached to a record. Shared so the converted event can hold the very same value.
pub type Thrown = Arc<dyn std::error::Error + Send + Sync>;

/// `java.util.logging` severity.
///
/// Ordered by integer value, so `Finest < Fine < Info < Severe` and `All`/`Off` sit at the extremes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JulLevel {
    Off,
    Severe,
    Warning,
    Info,
    Config,
    Fine,
    Finer,
    Finest,
    All,
    /// Application-defined level outside the standard set.
    Custom { name: String, value: i32 },
}

impl JulLevel {
    pub const STANDARD: [JulLevel; 9] = [
        JulLevel::Off,
        JulLevel::Severe,
        JulLevel::Warning,
        JulLevel::Info,
        JulLevel::Config,
        JulLevel::Fine,
        JulLevel::Finer,
        JulLevel::Finest,
        JulLevel::All,
    ];

    pub fn custom(name: impl Into<String>, value: i32) -> Self {
        JulLevel::Custom {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            JulLevel::Off => "OFF",
            JulLevel::Severe => "SEVERE",
            JulLevel::Warning => "WARNING",
            JulLevel::Info => "INFO",
            JulLevel::Config => "CONFIG",
            JulLevel::Fine => "FINE",
            JulLevel::Finer => "FINER",
            JulLevel::Finest => "FINEST",
            JulLevel::All => "ALL",
            JulLevel::Custom { name, .. } => name,
        }
    }

    pub fn int_value(&self) -> i32 {
        match self {
            JulLevel::Off => i32::MAX,
            JulLevel::Severe => 1000,
            JulLevel::Warning => 900,
            JulLevel::Info => 800,
            JulLevel::Config => 700,
            JulLevel::Fine => 500,
            JulLevel::Finer => 400,
            JulLevel::Finest => 300,
            JulLevel::All => i32::MIN,
            JulLevel::Custom { value, .. } => *value,
        }
    }

    /// Standard level carrying the same integer value, if any.
    ///
    /// JUL identifies levels by value, so a custom level at 1000 stands for SEVERE.
    pub fn standard_equivalent(&self) -> Option<JulLevel> {
        let value = self.int_value();
        Self::STANDARD
            .into_iter()
            .find(|level| level.int_value() == value)
    }
}

impl PartialOrd for JulLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.int_value().cmp(&other.int_value()) {
            // same weight but different identity: not comparable
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for JulLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JulLevel {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::STANDARD
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BridgeError::UnknownLevel(s.to_string()))
    }
}

impl Serialize for JulLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// Thread ids handed out the way java.util.logging does: small integers, one per thread, first use wins.
static NEXT_THREAD_ID: AtomicI32 = AtomicI32::new(10);

thread_local! {
    static THREAD_ID: i32 = NEXT_THREAD_ID.fetch_add(1, AtomicOrdering::Relaxed);
}

/// Numeric id of the calling thread, stable for the thread's lifetime.
pub fn current_thread_id() -> i32 {
    THREAD_ID.with(|id| *id)
}

/// A `java.util.logging.LogRecord` as it reaches the bridge.
#[derive(Clone)]
pub struct JulLogRecord {
    pub logger_name: Option<String>,
    pub level: JulLevel,
    /// Raw message; `{0}`-style parameters are never substituted.
    pub message: String,
    /// Event time, milliseconds since the Unix epoch.
    pub millis: i64,
    pub thread_id: i32,
    pub source_class_name: Option<String>,
    pub source_method_name: Option<String>,
    pub thrown: Option<Thrown>,
}

impl JulLogRecord {
    /// Record stamped with the current time and the calling thread's id.
    pub fn new(level: JulLevel, message: impl Into<String>) -> Self {
        Self {
            logger_name: None,
            level,
            message: message.into(),
            millis: Utc::now().timestamp_millis(),
            thread_id: current_thread_id(),
            source_class_name: None,
            source_method_name: None,
            thrown: None,
        }
    }

    pub fn with_logger_name(mut self, name: impl Into<String>) -> Self {
        self.logger_name = Some(name.into());
        self
    }

    pub fn with_millis(mut self, millis: i64) -> Self {
        self.millis = millis;
        self
    }

    pub fn with_thread_id(mut self, thread_id: i32) -> Self {
        self.thread_id = thread_id;
        self
    }

    pub fn with_source(
        mut self,
        class_name: impl Into<String>,
        method_name: impl Into<String>,
    ) -> Self {
        self.source_class_name = Some(class_name.into());
        self.source_method_name = Some(method_name.into());
        self
    }

    pub fn with_thrown(mut self, thrown: Thrown) -> Self {
        self.thrown = Some(thrown);
        self
    }
}

impl fmt::Debug for JulLogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JulLogRecord")
            .field("logger_name", &self.logger_name)
            .field("level", &self.level)
            .field("message", &self.message)
            .field("millis", &self.millis)
            .field("thread_id", &self.thread_id)
            .field("source_class_name", &self.source_class_name)
            .field("source_method_name", &self.source_method_name)
            .field("thrown", &self.thrown.as_ref().map(|e| e.to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_levels_are_ordered_by_value() {
        assert!(JulLevel::Finest < JulLevel::Finer);
        assert!(JulLevel::Finer < JulLevel::Fine);
        assert!(JulLevel::Fine < JulLevel::Config);
        assert!(JulLevel::Config < JulLevel::Info);
        assert!(JulLevel::Info < JulLevel::Warning);
        assert!(JulLevel::Warning < JulLevel::Severe);
        assert!(JulLevel::All < JulLevel::Finest);
        assert!(JulLevel::Severe < JulLevel::Off);
    }

    #[test]
    fn test_custom_level_with_same_value_is_not_comparable() {
        let notice = JulLevel::custom("NOTICE", 800);
        assert_ne!(notice, JulLevel::Info);
        assert_eq!(notice.partial_cmp(&JulLevel::Info), None);
        assert!(JulLevel::custom("AUDIT", 950) > JulLevel::Warning);
    }

    #[test]
    fn test_standard_equivalent_matches_by_value() {
        assert_eq!(
            JulLevel::custom("CRITICAL", 1000).standard_equivalent(),
            Some(JulLevel::Severe)
        );
        assert_eq!(JulLevel::Fine.standard_equivalent(), Some(JulLevel::Fine));
        assert_eq!(JulLevel::custom("AUDIT", 950).standard_equivalent(), None);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("warning".parse::<JulLevel>().unwrap(), JulLevel::Warning);
        assert_eq!(" FINEST ".parse::<JulLevel>().unwrap(), JulLevel::Finest);
        assert_eq!("Config".parse::<JulLevel>().unwrap(), JulLevel::Config);
    }

    #[test]
    fn test_from_str_unknown_name_fails() {
        let err = "VERBOSE".parse::<JulLevel>().unwrap_err();
        assert!(err.to_string().contains("VERBOSE"));
    }

    #[test]
    fn test_display_uses_level_name() {
        assert_eq!(JulLevel::Severe.to_string(), "SEVERE");
        assert_eq!(JulLevel::custom("AUDIT", 950).to_string(), "AUDIT");
    }

    #[test]
    fn test_thread_id_is_stable_per_thread() {
        let here = current_thread_id();
        assert_eq!(here, current_thread_id());

        let there = std::thread::spawn(current_thread_id).join().unwrap();
        assert_ne!(here, there);
    }

    #[test]
    fn test_new_record_defaults() {
        let record = JulLogRecord::new(JulLevel::Info, "hello");
        assert_eq!(record.logger_name, None);
        assert_eq!(record.thread_id, current_thread_id());
        assert!(record.millis > 0);
        assert!(record.thrown.is_none());
        assert!(record.source_class_name.is_none());
    }

    #[test]
    fn test_builder_overrides_fields() {
        let record = JulLogRecord::new(JulLevel::Fine, "x")
            .with_logger_name("app.Foo")
            .with_millis(1000)
            .with_thread_id(7)
            .with_source("app.Foo", "run");
        assert_eq!(record.logger_name.as_deref(), Some("app.Foo"));
        assert_eq!(record.millis, 1000);
        assert_eq!(record.thread_id, 7);
        assert_eq!(record.source_class_name.as_deref(), Some("app.Foo"));
        assert_eq!(record.source_method_name.as_deref(), Some("run"));
    }
}
