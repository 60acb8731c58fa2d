use super::*;

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
}

#[test]
fn test_log_level_aliases() {
    assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Trace);
    assert!("loud".parse::<LogLevel>().is_err());
}

#[test]
fn test_log_format_aliases() {
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert_eq!("yml".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert_eq!("YAML".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);

    match "xml".parse::<LogFormat>() {
        Err(ConfigError::ParseError { value, reason }) => {
            assert_eq!(value, "xml");
            assert_eq!(reason, "invalid log format");
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_log_output_parsing() {
    assert_eq!("stdout".parse::<LogOutput>().unwrap(), LogOutput::Stdout);
    assert_eq!("stderr".parse::<LogOutput>().unwrap(), LogOutput::Stderr);
}

#[test]
fn test_build_mode_flags() {
    assert!(BuildMode::Development.is_development());
    assert!(BuildMode::Development.source_maps());
    assert!(!BuildMode::Production.is_development());
    assert!(!BuildMode::Production.source_maps());
    assert_eq!(BuildMode::Production.to_string(), "production");
}

#[test]
fn test_missing_variable_message_names_the_variable() {
    let err = ConfigError::MissingEnvironmentVariable {
        name: "DEV_BEHAVIOR_PACKS_DIR".to_string(),
    };
    assert!(err.to_string().contains("DEV_BEHAVIOR_PACKS_DIR"));
}
