use rask_log_bridge::domain::Logger;
use rask_log_bridge::{
    Hierarchy, JulEventConverter, JulLevel, JulLogRecord, LoggerRepository, RepositoryError,
};
use std::sync::Arc;
use tracing_test::traced_test;

struct UnavailableRepository;

impl LoggerRepository for UnavailableRepository {
    fn get_logger(&self, _name: &str) -> Result<Arc<Logger>, RepositoryError> {
        Err(RepositoryError::Unavailable("closed".to_string()))
    }
}

#[traced_test]
#[test]
fn test_logger_creation_is_logged() {
    let hierarchy = Hierarchy::new();
    hierarchy.get_logger("app.Logged").unwrap();
    assert!(logs_contain("Created logger"));
    assert!(logs_contain("app.Logged"));
}

#[traced_test]
#[test]
fn test_conversion_is_traced() {
    let converter = JulEventConverter::with_repository(Hierarchy::new());
    converter
        .convert(&JulLogRecord::new(JulLevel::Warning, "x").with_logger_name("app.Traced"))
        .unwrap();
    assert!(logs_contain("Converted record"));
    assert!(logs_contain("to=WARN"));
}

#[traced_test]
#[test]
fn test_lookup_failure_is_logged() {
    let converter = JulEventConverter::with_repository(UnavailableRepository);
    let result = converter.convert(&JulLogRecord::new(JulLevel::Info, "x"));
    assert!(result.is_err());
    assert!(logs_contain("Logger lookup failed"));
    assert!(logs_contain("unknown.jul.logger"));
}
