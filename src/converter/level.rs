use crate::domain::{JulLevel, Log4jLevel};
use crate::port::LevelConverter;

/// Default severity policy.
///
/// - FINEST -> TRACE
/// - FINER, FINE -> DEBUG
/// - INFO -> INFO
/// - WARNING -> WARN
/// - SEVERE -> ERROR
/// - ALL -> ALL, OFF -> OFF
/// - anything else -> DEBUG
///
/// Levels are recognised by integer value, so a custom level sharing a standard level's value
/// takes that level's row.
///
/// The reverse direction sends DEBUG to FINER and both ERROR and FATAL to SEVERE, with FINE as the
/// fallback. FINE therefore comes back as FINER after a round trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLevelConverter;

pub static DEFAULT_LEVEL_CONVERTER: DefaultLevelConverter = DefaultLevelConverter;

impl LevelConverter for DefaultLevelConverter {
    fn convert_jul_level(&self, jul_level: &JulLevel) -> Log4jLevel {
        match jul_level.standard_equivalent() {
            Some(JulLevel::Finest) => Log4jLevel::Trace,
            Some(JulLevel::Finer | JulLevel::Fine) => Log4jLevel::Debug,
            Some(JulLevel::Info) => Log4jLevel::Info,
            Some(JulLevel::Warning) => Log4jLevel::Warn,
            Some(JulLevel::Severe) => Log4jLevel::Error,
            Some(JulLevel::All) => Log4jLevel::All,
            Some(JulLevel::Off) => Log4jLevel::Off,
            _ => Log4jLevel::Debug,
        }
    }

    fn convert_log4j_level(&self, log4j_level: &Log4jLevel) -> JulLevel {
        match log4j_level.standard_equivalent() {
            Some(Log4jLevel::Trace) => JulLevel::Finest,
            Some(Log4jLevel::Debug) => JulLevel::Finer,
            Some(Log4jLevel::Info) => JulLevel::Info,
            Some(Log4jLevel::Warn) => JulLevel::Warning,
            Some(Log4jLevel::Error | Log4jLevel::Fatal) => JulLevel::Severe,
            Some(Log4jLevel::All) => JulLevel::All,
            Some(Log4jLevel::Off) => JulLevel::Off,
            _ => JulLevel::Fine,
        }
    }
}
