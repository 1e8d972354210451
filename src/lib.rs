#![warn(rust_2018_idioms)]

pub mod adapter;
pub mod config;
pub mod converter;
pub mod domain;
pub mod error;
pub mod port;

pub use adapter::Hierarchy;
pub use config::BridgeSettings;
pub use converter::{DEFAULT_LEVEL_CONVERTER, DefaultLevelConverter, JulEventConverter};
pub use domain::{JulLevel, JulLogRecord, Log4jLevel, LoggingEvent};
pub use error::{BridgeError, RepositoryError};
pub use port::{LevelConverter, LoggerRepository};
