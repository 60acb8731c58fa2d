use super::*;
use crate::application::mocks::{MockEnvironmentProvider, RecordingOrchestrator};
use crate::primitives::{BuildMode, ConfigError};
use tempfile::TempDir;

fn production_config() -> BuildConfiguration {
    resolve_configuration(
        &MockEnvironmentProvider::new().with_var("VERSION", "1.0.0"),
        AddonIdentity::default(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_run_build_hands_configuration_over_once() {
    let orchestrator = RecordingOrchestrator::new();
    let env = MockEnvironmentProvider::new()
        .development("/mc/bp", "/mc/rp")
        .with_var("WATCH", "1");

    let config = run_build(&env, AddonIdentity::default(), &orchestrator)
        .await
        .unwrap();

    assert_eq!(orchestrator.calls(), 1);
    let received = orchestrator.received.lock().unwrap();
    assert_eq!(received[0], config);
    assert_eq!(received[0].mode, BuildMode::Development);
    assert!(received[0].watch);
}

#[tokio::test]
async fn test_config_error_never_reaches_orchestrator() {
    let orchestrator = RecordingOrchestrator::new();
    let env = MockEnvironmentProvider::new().with_var("DEV", "1");

    let err = run_build(&env, AddonIdentity::default(), &orchestrator)
        .await
        .unwrap_err();

    assert_eq!(orchestrator.calls(), 0);
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::MissingEnvironmentVariable { .. })
    ));
}

#[tokio::test]
async fn test_invalid_version_never_reaches_orchestrator() {
    let orchestrator = RecordingOrchestrator::new();
    let env = MockEnvironmentProvider::new().with_var("VERSION", "1.2.x");

    let err = run_build(&env, AddonIdentity::default(), &orchestrator)
        .await
        .unwrap_err();

    assert_eq!(orchestrator.calls(), 0);
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidVersion { .. })
    ));
}

#[tokio::test]
async fn test_missing_engine_program_is_spawn_error() {
    let temp = TempDir::new().unwrap();
    let orchestrator = EngineOrchestrator::new(
        "packsmith-engine-that-does-not-exist".to_string(),
        Vec::new(),
        temp.path().to_path_buf(),
    );

    let result = orchestrator.build(&production_config()).await;
    assert!(matches!(result, Err(OrchestratorError::SpawnFailed { .. })));
}

#[cfg(unix)]
#[tokio::test]
async fn test_engine_receives_configuration_on_stdin() {
    let temp = TempDir::new().unwrap();
    let orchestrator = EngineOrchestrator::new(
        "sh".to_string(),
        vec!["-c".to_string(), "cat > received.json".to_string()],
        temp.path().to_path_buf(),
    );
    let config = production_config();

    orchestrator.build(&config).await.unwrap();

    let received = std::fs::read_to_string(temp.path().join("received.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&received).unwrap();
    assert_eq!(
        value["behaviorPack"]["manifest"]["header"]["name"],
        "Untitled Add-on v1.0.0"
    );
    assert_eq!(value["archive"].as_array().unwrap().len(), 2);
}

#[cfg(unix)]
#[tokio::test]
async fn test_engine_failure_reports_exit_code() {
    let temp = TempDir::new().unwrap();
    let orchestrator = EngineOrchestrator::new(
        "sh".to_string(),
        vec!["-c".to_string(), "exit 3".to_string()],
        temp.path().to_path_buf(),
    );

    match orchestrator.build(&production_config()).await {
        Err(OrchestratorError::EngineFailed { program, code }) => {
            assert_eq!(program, "sh");
            assert_eq!(code, Some(3));
        }
        other => panic!("Expected EngineFailed, got {:?}", other),
    }
}
