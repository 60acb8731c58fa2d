//! E2E tests for the engine handoff
//!
//! Each test resolves a real configuration and passes it to a mock engine
//! script, then inspects exactly what the engine received.

#![cfg(unix)]

use anyhow::Result;
use packsmith_lib::addon::{AddonIdentity, run_build};
use packsmith_lib::application::mocks::MockEnvironmentProvider;
use packsmith_tests::{MockEngineBehavior, TestEnvironment};
use serde_json::json;

#[tokio::test]
async fn test_development_build_reaches_engine() -> Result<()> {
    let env = TestEnvironment::new()?;
    let engine = env.add_mock_engine("dev-engine", MockEngineBehavior::Succeed)?;
    let vars = env.development_env().with_var("VERSION", "1.3.0");

    run_build(&vars, AddonIdentity::default(), &engine).await?;

    let received = env.received_config("dev-engine")?;
    let behavior_dirs = received["behaviorPack"]["targetDir"].as_array().unwrap();
    assert_eq!(behavior_dirs.len(), 2);
    assert_eq!(behavior_dirs[0], "build/dev/bp");
    assert_eq!(
        behavior_dirs[1],
        env.dev_behavior_dir
            .join("untitled-addon-bp-dev")
            .to_string_lossy()
            .into_owned()
    );

    let resource_dirs = received["resourcePack"]["targetDir"].as_array().unwrap();
    assert_eq!(
        resource_dirs[1],
        env.dev_resource_dir
            .join("untitled-addon-rp-dev")
            .to_string_lossy()
            .into_owned()
    );

    assert_eq!(received["archive"], json!([]));
    assert_eq!(received["behaviorPack"]["scripts"]["sourceMap"], true);
    assert_eq!(
        received["behaviorPack"]["manifest"]["header"]["name"],
        "Untitled Add-on DEV"
    );
    assert_eq!(
        received["resourcePack"]["manifest"]["header"]["version"],
        json!([1, 3, 0])
    );
    Ok(())
}

#[tokio::test]
async fn test_production_build_reaches_engine() -> Result<()> {
    let env = TestEnvironment::new()?;
    let engine = env.add_mock_engine("release-engine", MockEngineBehavior::Succeed)?;
    let vars = MockEnvironmentProvider::new().with_var("VERSION", "2.0.1");

    run_build(&vars, AddonIdentity::default(), &engine).await?;

    let received = env.received_config("release-engine")?;
    assert_eq!(received["behaviorPack"]["targetDir"], json!(["build/v2.0.1/bp"]));
    assert_eq!(received["resourcePack"]["targetDir"], json!(["build/v2.0.1/rp"]));
    assert_eq!(
        received["archive"],
        json!([
            { "outFile": "build/v2.0.1/untitled-addon-v2.0.1.mcaddon" },
            { "outFile": "build/v2.0.1/untitled-addon-v2.0.1.zip" }
        ])
    );
    assert_eq!(received["behaviorPack"]["scripts"]["sourceMap"], false);
    assert_eq!(received["watch"], false);
    Ok(())
}

#[tokio::test]
async fn test_engine_runs_once_in_workdir() -> Result<()> {
    let env = TestEnvironment::new()?;
    let engine = env.add_mock_engine("watch-engine", MockEngineBehavior::Succeed)?;
    let vars = env.development_env().with_var("WATCH", "1");

    run_build(&vars, AddonIdentity::default(), &engine).await?;

    let log = env.engine_log("watch-engine")?;
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains("watch-engine build"));
    let workdir = std::fs::canonicalize(&env.work_path)?;
    assert!(log.contains(&format!("(cwd: {})", workdir.display())));
    assert_eq!(env.received_config("watch-engine")?["watch"], true);
    Ok(())
}

#[tokio::test]
async fn test_engine_failure_propagates() -> Result<()> {
    let env = TestEnvironment::new()?;
    let engine = env.add_mock_engine(
        "broken-engine",
        MockEngineBehavior::Fail {
            code: 2,
            error: "bundling failed".to_string(),
        },
    )?;

    let err = run_build(&MockEnvironmentProvider::new(), AddonIdentity::default(), &engine)
        .await
        .unwrap_err();

    let chain = format!("{:#}", err);
    assert!(chain.contains("Build engine handoff failed"));
    assert!(chain.contains("exited with status Some(2)"));
    Ok(())
}

#[tokio::test]
async fn test_missing_dev_dirs_never_start_engine() -> Result<()> {
    let env = TestEnvironment::new()?;
    let engine = env.add_mock_engine("idle-engine", MockEngineBehavior::Succeed)?;
    let vars = MockEnvironmentProvider::new()
        .with_var("DEV", "1")
        .with_var("DEV_BEHAVIOR_PACKS_DIR", &env.dev_behavior_dir.to_string_lossy());

    let err = run_build(&vars, AddonIdentity::default(), &engine)
        .await
        .unwrap_err();

    assert!(format!("{:#}", err).contains("DEV_RESOURCE_PACKS_DIR"));
    assert!(env.engine_log("idle-engine")?.is_empty());
    Ok(())
}
