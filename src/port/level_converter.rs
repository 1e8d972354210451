use crate::domain::{JulLevel, Log4jLevel};

/// Policy deciding how severities cross between the two frameworks.
///
/// Implementations must be total: every input level, including custom ones, yields a level.
pub trait LevelConverter: Send + Sync {
    fn convert_jul_level(&self, jul_level: &JulLevel) -> Log4jLevel;

    fn convert_log4j_level(&self, log4j_level: &Log4jLevel) -> JulLevel;
}
