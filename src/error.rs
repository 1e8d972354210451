use thiserror::Error;

/// Failure raised by a `LoggerRepository` lookup.
///
/// The event converter hands these back to its caller untouched.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Logger repository unavailable: {0}")]
    Unavailable(String),

    #[error("Logger repository backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Invalid bridge configuration: {0}")]
    Config(String),

    #[error("Unknown level name: {0}")]
    UnknownLevel(String),
}
