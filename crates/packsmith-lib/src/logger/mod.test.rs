use super::*;

#[test]
fn test_default_filter_scopes_packsmith_level() {
    assert_eq!(
        default_filter(LogLevel::Debug),
        "packsmith=debug,tokio=warn,mio=warn,warn"
    );
    assert!(default_filter(LogLevel::Warning).starts_with("packsmith=warn,"));
}

#[test]
fn test_logger_initializes_once() {
    // The only test in this binary that installs a subscriber
    let config = LoggerConfig {
        level: LogLevel::Trace,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        color: false,
    };

    let logger = Logger::init(config.clone()).unwrap();
    assert_eq!(logger.level(), LogLevel::Trace);
    assert!(Logger::is_initialized());
    assert!(Logger::global().is_some());

    assert!(matches!(
        Logger::init(config),
        Err(LoggerError::AlreadyInitialized)
    ));
}
