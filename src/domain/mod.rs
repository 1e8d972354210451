//! Domain layer for rask-log-bridge.
//!
//! The two data models the bridge translates between:
//! - `jul`: `java.util.logging` levels and `JulLogRecord`
//! - `log4j`: log4j levels, `Logger` handles and `LoggingEvent`

pub mod jul;
pub mod log4j;

pub use jul::{JulLevel, JulLogRecord, Thrown, current_thread_id};
pub use log4j::{Log4jLevel, LocationInfo, Logger, LoggingEvent, ThrowableInformation};
