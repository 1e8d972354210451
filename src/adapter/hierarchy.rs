//! In-memory logger repository.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;

use crate::domain::Logger;
use crate::error::RepositoryError;
use crate::port::LoggerRepository;

pub const ROOT_LOGGER_NAME: &str = "root";

static GLOBAL: OnceLock<Hierarchy> = OnceLock::new();

/// Thread-safe repository that creates loggers on first lookup.
///
/// Clones share the same loggers.
#[derive(Clone)]
pub struct Hierarchy {
    loggers: Arc<RwLock<HashMap<String, Arc<Logger>>>>,
    root: Arc<Logger>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self {
            loggers: Arc::new(RwLock::new(HashMap::new())),
            root: Arc::new(Logger::new(ROOT_LOGGER_NAME)),
        }
    }

    /// Process-wide default repository, created on first use.
    pub fn global() -> Self {
        GLOBAL.get_or_init(Hierarchy::new).clone()
    }

    pub fn root_logger(&self) -> Arc<Logger> {
        self.root.clone()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    /// Names of every logger created so far, sorted. The root logger is not listed.
    pub fn current_loggers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Hierarchy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hierarchy")
            .field("loggers", &self.len())
            .finish()
    }
}

impl LoggerRepository for Hierarchy {
    fn get_logger(&self, name: &str) -> Result<Arc<Logger>, RepositoryError> {
        if let Some(logger) = self.loggers.read().get(name) {
            return Ok(logger.clone());
        }

        let mut loggers = self.loggers.write();
        // another thread may have created it between the two locks
        let logger = loggers
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(logger = name, "Created logger");
                Arc::new(Logger::new(name))
            })
            .clone();
        Ok(logger)
    }
}
