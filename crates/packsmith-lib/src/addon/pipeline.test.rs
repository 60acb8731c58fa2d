use super::*;
use crate::application::mocks::MockEnvironmentProvider;
use serde_json::json;

fn resolve_with(env: MockEnvironmentProvider) -> Result<BuildConfiguration, ConfigError> {
    resolve_configuration(&env, AddonIdentity::default())
}

#[test]
fn test_empty_environment_resolves_production_fallback() {
    let config = resolve_with(MockEnvironmentProvider::new()).unwrap();

    assert_eq!(config.mode, BuildMode::Production);
    assert!(!config.watch);
    assert_eq!(config.version, VersionTriple::new(0, 0, 1));
    assert_eq!(config.display_name, "Untitled Add-on v0.0.1");
    assert_eq!(config.manifests.behavior.header.name, config.display_name);
    assert_eq!(config.manifests.resource.header.name, config.display_name);
}

#[test]
fn test_production_plan_counts() {
    let config = resolve_with(MockEnvironmentProvider::new().with_var("VERSION", "2.5.1")).unwrap();

    assert_eq!(config.targets.behavior_output_dirs.len(), 1);
    assert_eq!(config.targets.resource_output_dirs.len(), 1);
    assert_eq!(config.targets.archive_requests.len(), 2);
    for request in &config.targets.archive_requests {
        assert!(request.out_file.starts_with("build/v2.5.1"));
    }
    let extensions: Vec<_> = config
        .targets
        .archive_requests
        .iter()
        .filter_map(|r| r.out_file.extension().and_then(|e| e.to_str()))
        .collect();
    assert_eq!(extensions, vec!["mcaddon", "zip"]);
}

#[test]
fn test_development_plan_counts() {
    let env = MockEnvironmentProvider::new().development("/mc/bp", "/mc/rp");
    let config = resolve_with(env).unwrap();

    assert_eq!(config.mode, BuildMode::Development);
    assert_eq!(config.display_name, "Untitled Add-on DEV");
    assert_eq!(config.targets.behavior_output_dirs.len(), 2);
    assert_eq!(config.targets.resource_output_dirs.len(), 2);
    assert!(config.targets.archive_requests.is_empty());
}

#[test]
fn test_development_without_dirs_fails() {
    let env = MockEnvironmentProvider::new()
        .with_var("DEV", "1")
        .with_var("DEV_RESOURCE_PACKS_DIR", "/mc/rp");
    assert!(matches!(
        resolve_with(env),
        Err(ConfigError::MissingEnvironmentVariable { .. })
    ));

    let env = MockEnvironmentProvider::new()
        .with_var("DEV", "true")
        .with_var("DEV_BEHAVIOR_PACKS_DIR", "/mc/bp")
        .with_var("DEV_RESOURCE_PACKS_DIR", "");
    assert!(matches!(
        resolve_with(env),
        Err(ConfigError::MissingEnvironmentVariable { .. })
    ));
}

#[test]
fn test_malformed_version_fails() {
    let env = MockEnvironmentProvider::new().with_var("VERSION", "1.2");
    assert!(matches!(
        resolve_with(env),
        Err(ConfigError::InvalidVersion { .. })
    ));
}

#[test]
fn test_manifests_share_version_fields_in_both_modes() {
    let dev = resolve_with(
        MockEnvironmentProvider::new()
            .development("/a", "/b")
            .with_var("VERSION", "3.1.4"),
    )
    .unwrap();
    let prod = resolve_with(MockEnvironmentProvider::new().with_var("VERSION", "3.1.4")).unwrap();

    for config in [dev, prod] {
        let behavior = &config.manifests.behavior.header;
        let resource = &config.manifests.resource.header;
        assert_eq!(behavior.version, resource.version);
        assert_eq!(behavior.min_engine_version, resource.min_engine_version);
        assert_eq!(behavior.version, VersionTriple::new(3, 1, 4));
    }
}

#[test]
fn test_watch_flag_carried_through() {
    let config = resolve_with(MockEnvironmentProvider::new().with_var("WATCH", "1")).unwrap();
    assert!(config.watch);
    assert!(config.engine_input().watch);
}

#[test]
fn test_engine_input_source_maps_follow_mode() {
    let dev = resolve_with(MockEnvironmentProvider::new().development("/a", "/b")).unwrap();
    let prod = resolve_with(MockEnvironmentProvider::new()).unwrap();

    assert!(dev.engine_input().behavior_pack.scripts.source_map);
    assert!(!prod.engine_input().behavior_pack.scripts.source_map);
}

#[cfg(unix)]
#[test]
fn test_engine_input_json_shape() {
    let config = resolve_with(MockEnvironmentProvider::new().with_var("VERSION", "1.0.0")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();

    assert_eq!(value["behaviorPack"]["srcDir"], "src/bp");
    assert_eq!(value["behaviorPack"]["targetDir"], json!(["build/v1.0.0/bp"]));
    assert_eq!(
        value["behaviorPack"]["scripts"],
        json!({ "entry": "src/bp/scripts/index.ts", "bundle": true, "sourceMap": false })
    );
    assert_eq!(value["behaviorPack"]["manifest"]["format_version"], 2);
    assert_eq!(value["resourcePack"]["srcDir"], "src/rp");
    assert_eq!(value["resourcePack"]["generateTextureList"], true);
    assert_eq!(value["resourcePack"]["manifest"]["capabilities"], json!(["pbr"]));
    assert_eq!(value["watch"], false);
    assert_eq!(
        value["archive"],
        json!([
            { "outFile": "build/v1.0.0/untitled-addon-v1.0.0.mcaddon" },
            { "outFile": "build/v1.0.0/untitled-addon-v1.0.0.zip" }
        ])
    );
}
