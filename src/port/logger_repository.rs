use std::sync::Arc;

use crate::domain::Logger;
use crate::error::RepositoryError;

/// Name-keyed store of logger handles.
///
/// `get_logger` creates the logger on first use and must return the same handle
/// for the same name afterwards.
pub trait LoggerRepository: Send + Sync {
    fn get_logger(&self, name: &str) -> Result<Arc<Logger>, RepositoryError>;
}

impl<R: LoggerRepository + ?Sized> LoggerRepository for Arc<R> {
    fn get_logger(&self, name: &str) -> Result<Arc<Logger>, RepositoryError> {
        (**self).get_logger(name)
    }
}

impl<R: LoggerRepository + ?Sized> LoggerRepository for &R {
    fn get_logger(&self, name: &str) -> Result<Arc<Logger>, RepositoryError> {
        (**self).get_logger(name)
    }
}
