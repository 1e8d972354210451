//! Converter from `java.util.logging` records to log4j events

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{trace, warn};

use crate::adapter::Hierarchy;
use crate::config::BridgeSettings;
use crate::converter::level::DEFAULT_LEVEL_CONVERTER;
use crate::domain::{JulLogRecord, LocationInfo, LoggingEvent, ThrowableInformation};
use crate::error::{BridgeError, RepositoryError};
use crate::port::{LevelConverter, LoggerRepository};

/// Builds a log4j `LoggingEvent` from a `JulLogRecord`.
///
/// Holds no mutable state; one instance can serve every thread.
pub struct JulEventConverter<R = Hierarchy> {
    repository: R,
    level_converter: Arc<dyn LevelConverter>,
    settings: BridgeSettings,
}

impl JulEventConverter<Hierarchy> {
    /// Converter bound to the process-wide `Hierarchy` and the default level policy.
    pub fn new() -> Self {
        Self::with_repository(Hierarchy::global())
    }
}

impl Default for JulEventConverter<Hierarchy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: LoggerRepository> JulEventConverter<R> {
    pub fn with_repository(repository: R) -> Self {
        Self::with_level_converter(repository, Arc::new(DEFAULT_LEVEL_CONVERTER))
    }

    pub fn with_level_converter(repository: R, level_converter: Arc<dyn LevelConverter>) -> Self {
        Self {
            repository,
            level_converter,
            settings: BridgeSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: BridgeSettings) -> Result<Self, BridgeError> {
        settings.validate()?;
        self.settings = settings;
        Ok(self)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn level_converter(&self) -> &dyn LevelConverter {
        self.level_converter.as_ref()
    }

    pub fn settings(&self) -> &BridgeSettings {
        &self.settings
    }

    /// Converts one record, keeping the logger name as given.
    ///
    /// The message is passed through unformatted and the thread name is the record's
    /// numeric thread id rendered in decimal. The only failure is a repository lookup
    /// error, returned as-is.
    pub fn convert(&self, record: &JulLogRecord) -> Result<LoggingEvent, RepositoryError> {
        let logger_name = match record.logger_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.settings.unknown_logger_name.clone(),
        };

        let logger = self.repository.get_logger(&logger_name).inspect_err(|e| {
            warn!(logger = %logger_name, error = %e, "Logger lookup failed");
        })?;

        let placeholder = &self.settings.location_placeholder;
        let location_info = LocationInfo::new(
            placeholder.as_str(),
            record.source_class_name.as_deref().unwrap_or(placeholder),
            record.source_method_name.as_deref().unwrap_or(placeholder),
            placeholder.as_str(),
        );

        // records carry only the numeric id, not the thread's name
        let thread_name = record.thread_id.to_string();

        let throwable_info = record.thrown.clone().map(ThrowableInformation::new);
        let level = self.level_converter.convert_jul_level(&record.level);

        trace!(logger = %logger_name, from = %record.level, to = %level, "Converted record");

        Ok(LoggingEvent {
            logger_name,
            logger,
            timestamp: record.millis,
            level,
            message: record.message.clone(),
            thread_name,
            throwable_info,
            ndc: None,
            location_info,
            properties: HashMap::new(),
        })
    }
}
