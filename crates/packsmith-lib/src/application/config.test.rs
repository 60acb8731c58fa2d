use super::*;
use crate::application::mocks::MockEnvironmentProvider;

#[test]
fn test_config_loading_defaults() {
    let config = AppConfig::from_provider(&MockEnvironmentProvider::new()).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
}

#[test]
fn test_config_reads_prefixed_variables() {
    let env = MockEnvironmentProvider::new()
        .with_var("PACKSMITH_LOG_LEVEL", "4")
        .with_var("PACKSMITH_LOG_FORMAT", "json")
        .with_var("PACKSMITH_LOG_OUTPUT", "stdout")
        .with_var("PACKSMITH_WORKDIR", "/projects/addon")
        .with_var("PACKSMITH_ENGINE", "node scripts/engine.js --verbose")
        .with_var("LOG_LEVEL", "0");

    let config = AppConfig::from_provider(&env).unwrap();
    assert_eq!(config.log_level, LogLevel::Trace);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.log_output, LogOutput::Stdout);
    assert_eq!(config.workdir, Some(PathBuf::from("/projects/addon")));

    let (program, args) = config.engine_command().unwrap();
    assert_eq!(program, "node");
    assert_eq!(args, vec!["scripts/engine.js", "--verbose"]);
}

#[test]
fn test_config_rejects_malformed_level() {
    let env = MockEnvironmentProvider::new().with_var("PACKSMITH_LOG_LEVEL", "loud");
    let result = AppConfig::from_provider(&env);
    assert!(matches!(
        result,
        Err(ConfigError::EnvironmentParsingFailed { .. })
    ));
}

#[test]
fn test_config_accepts_level_names() {
    let level_for = |raw: &str| {
        let env = MockEnvironmentProvider::new().with_var("PACKSMITH_LOG_LEVEL", raw);
        AppConfig::from_provider(&env).unwrap().log_level
    };

    assert_eq!(level_for("debug"), LogLevel::Debug);
    assert_eq!(level_for("warning"), LogLevel::Warning);
    assert_eq!(level_for("Warn"), LogLevel::Warning);
    assert_eq!(level_for("verbose"), LogLevel::Trace);
    assert_eq!(level_for(" 1 "), LogLevel::Warning);
    assert_eq!(level_for("9"), LogLevel::Trace);
}

#[test]
fn test_config_format_and_output_aliases() {
    let env = MockEnvironmentProvider::new()
        .with_var("PACKSMITH_LOG_FORMAT", "yaml")
        .with_var("PACKSMITH_LOG_OUTPUT", "STDOUT");
    let config = AppConfig::from_provider(&env).unwrap();
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.log_output, LogOutput::Stdout);
}

#[test]
fn test_config_rejects_unknown_format_with_reason() {
    let env = MockEnvironmentProvider::new().with_var("PACKSMITH_LOG_FORMAT", "xml");
    let err = AppConfig::from_provider(&env).unwrap_err();
    assert!(matches!(err, ConfigError::EnvironmentParsingFailed { .. }));
    assert!(err.to_string().contains("invalid log format"));
}

#[test]
fn test_validate_clears_blank_engine_and_fills_workdir() {
    let mut config = AppConfig {
        engine: Some("   ".to_string()),
        ..AppConfig::default()
    };
    config.validate().unwrap();

    assert_eq!(config.engine, None);
    assert!(config.engine_command().is_none());
    assert!(config.workdir.is_some());
}

#[test]
fn test_validate_keeps_explicit_workdir() {
    let mut config = AppConfig {
        workdir: Some(PathBuf::from("/explicit")),
        ..AppConfig::default()
    };
    config.validate().unwrap();
    assert_eq!(config.workdir, Some(PathBuf::from("/explicit")));
}

#[test]
fn test_logger_config_level_mapping() {
    let config = AppConfig {
        log_level: LogLevel::Debug,
        log_format: LogFormat::Pretty,
        ..AppConfig::default()
    };
    let logger_config = config.to_logger_config();
    assert_eq!(logger_config.level, LogLevel::Debug);
    assert_eq!(logger_config.format, LogFormat::Pretty);
    assert_eq!(logger_config.output, LogOutput::Stderr);
}
