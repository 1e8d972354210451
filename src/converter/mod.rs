//! Conversions between the JUL and log4j models
//!
//! - `level`: the default severity policy
//! - `event`: `JulLogRecord` -> `LoggingEvent`

pub mod event;
pub mod level;

pub use event::JulEventConverter;
pub use level::{DEFAULT_LEVEL_CONVERTER, DefaultLevelConverter};
