use packsmith_lib::addon::{AddonIdentity, VersionTriple, resolve_configuration};
use packsmith_lib::application::{AppConfig, EnvironmentProvider};
use packsmith_lib::{BuildMode, ConfigError, LogFormat, LogLevel};
use std::collections::HashMap;
use std::path::PathBuf;

/// Minimal provider implemented against the public trait only
struct FixedEnvironment(HashMap<&'static str, &'static str>);

impl EnvironmentProvider for FixedEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).map(|v| v.to_string())
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

fn sky_islands() -> AddonIdentity {
    AddonIdentity {
        display_name_base: "Sky Islands".to_string(),
        slug: "sky-islands".to_string(),
        description: "Floating terrain".to_string(),
        min_engine_version: VersionTriple::new(1, 21, 50),
    }
}

#[test]
fn test_custom_identity_flows_into_names_and_paths() {
    let env = FixedEnvironment(HashMap::from([("VERSION", "0.4.0")]));
    let config = resolve_configuration(&env, sky_islands()).unwrap();

    assert_eq!(config.mode, BuildMode::Production);
    assert_eq!(config.display_name, "Sky Islands v0.4.0");
    assert_eq!(
        config.targets.archive_requests[0].out_file,
        PathBuf::from("build/v0.4.0/sky-islands-v0.4.0.mcaddon")
    );
    assert_eq!(
        config.manifests.resource.header.min_engine_version,
        VersionTriple::new(1, 21, 50)
    );
    assert_eq!(config.manifests.behavior.header.description, "Floating terrain");
}

#[test]
fn test_custom_identity_dev_folders() {
    let env = FixedEnvironment(HashMap::from([
        ("DEV", "yes"),
        ("DEV_BEHAVIOR_PACKS_DIR", "/games/development_behavior_packs"),
        ("DEV_RESOURCE_PACKS_DIR", "/games/development_resource_packs"),
    ]));
    let config = resolve_configuration(&env, sky_islands()).unwrap();

    assert_eq!(config.display_name, "Sky Islands DEV");
    assert_eq!(
        config.targets.behavior_output_dirs[1],
        PathBuf::from("/games/development_behavior_packs/sky-islands-bp-dev")
    );
    assert_eq!(
        config.targets.resource_output_dirs[1],
        PathBuf::from("/games/development_resource_packs/sky-islands-rp-dev")
    );
}

#[test]
fn test_dev_flag_disabled_by_zero() {
    let env = FixedEnvironment(HashMap::from([("DEV", "0")]));
    let config = resolve_configuration(&env, sky_islands()).unwrap();
    assert_eq!(config.mode, BuildMode::Production);
}

#[test]
fn test_configuration_errors_are_typed() {
    let env = FixedEnvironment(HashMap::from([("VERSION", "v1.0.0")]));
    assert!(matches!(
        resolve_configuration(&env, sky_islands()),
        Err(ConfigError::InvalidVersion { .. })
    ));
}

#[test]
fn test_app_config_from_public_provider() {
    let env = FixedEnvironment(HashMap::from([
        ("PACKSMITH_LOG_FORMAT", "yml"),
        ("PACKSMITH_LOG_LEVEL", "debug"),
    ]));
    let config = AppConfig::from_provider(&env).unwrap();
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.engine, None);
}
