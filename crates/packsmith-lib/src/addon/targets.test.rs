use super::*;

fn dev_env() -> BuildEnvironment {
    BuildEnvironment {
        dev: true,
        dev_behavior_packs_dir: Some(PathBuf::from("/mc/development_behavior_packs")),
        dev_resource_packs_dir: Some(PathBuf::from("/mc/development_resource_packs")),
        ..BuildEnvironment::default()
    }
}

#[test]
fn test_development_plan_layout() {
    let plan = TargetPlan::build(
        BuildMode::Development,
        "untitled-addon",
        &VersionTriple::new(0, 0, 1),
        &dev_env(),
    )
    .unwrap();

    assert_eq!(
        plan.behavior_output_dirs,
        vec![
            PathBuf::from("build/dev/bp"),
            PathBuf::from("/mc/development_behavior_packs/untitled-addon-bp-dev"),
        ]
    );
    assert_eq!(
        plan.resource_output_dirs,
        vec![
            PathBuf::from("build/dev/rp"),
            PathBuf::from("/mc/development_resource_packs/untitled-addon-rp-dev"),
        ]
    );
    assert!(plan.archive_requests.is_empty());
}

#[test]
fn test_development_requires_behavior_dir() {
    let env = BuildEnvironment {
        dev_behavior_packs_dir: None,
        ..dev_env()
    };
    match TargetPlan::build(BuildMode::Development, "addon", &VersionTriple::new(0, 0, 1), &env) {
        Err(ConfigError::MissingEnvironmentVariable { name }) => {
            assert_eq!(name, "DEV_BEHAVIOR_PACKS_DIR");
        }
        other => panic!("Expected MissingEnvironmentVariable, got {:?}", other),
    }
}

#[test]
fn test_development_requires_resource_dir() {
    let env = BuildEnvironment {
        dev_resource_packs_dir: None,
        ..dev_env()
    };
    match TargetPlan::build(BuildMode::Development, "addon", &VersionTriple::new(0, 0, 1), &env) {
        Err(ConfigError::MissingEnvironmentVariable { name }) => {
            assert_eq!(name, "DEV_RESOURCE_PACKS_DIR");
        }
        other => panic!("Expected MissingEnvironmentVariable, got {:?}", other),
    }
}

#[test]
fn test_production_plan_layout() {
    let plan = TargetPlan::build(
        BuildMode::Production,
        "untitled-addon",
        &VersionTriple::new(1, 2, 3),
        &BuildEnvironment::default(),
    )
    .unwrap();

    assert_eq!(plan.behavior_output_dirs, vec![PathBuf::from("build/v1.2.3/bp")]);
    assert_eq!(plan.resource_output_dirs, vec![PathBuf::from("build/v1.2.3/rp")]);

    let files: Vec<&PathBuf> = plan.archive_requests.iter().map(|r| &r.out_file).collect();
    assert_eq!(
        files,
        vec![
            &PathBuf::from("build/v1.2.3/untitled-addon-v1.2.3.mcaddon"),
            &PathBuf::from("build/v1.2.3/untitled-addon-v1.2.3.zip"),
        ]
    );
    assert_eq!(plan.archive_requests[0].format, ArchiveFormat::McAddon);
    assert_eq!(plan.archive_requests[1].format, ArchiveFormat::Zip);
}

#[test]
fn test_production_ignores_dev_dirs() {
    let with_dirs = TargetPlan::build(
        BuildMode::Production,
        "addon",
        &VersionTriple::new(2, 0, 0),
        &dev_env(),
    )
    .unwrap();
    let without = TargetPlan::production("addon", &VersionTriple::new(2, 0, 0));
    assert_eq!(with_dirs, without);
}

#[test]
fn test_output_dirs_never_empty() {
    let dev = TargetPlan::build(
        BuildMode::Development,
        "addon",
        &VersionTriple::new(0, 0, 1),
        &dev_env(),
    )
    .unwrap();
    let prod = TargetPlan::production("addon", &VersionTriple::new(0, 0, 1));

    for plan in [dev, prod] {
        assert!(!plan.behavior_output_dirs.is_empty());
        assert!(!plan.resource_output_dirs.is_empty());
    }
}

#[cfg(unix)]
#[test]
fn test_archive_request_serializes_out_file_only() {
    let plan = TargetPlan::production("addon", &VersionTriple::new(1, 0, 0));
    let value = serde_json::to_value(&plan.archive_requests[1]).unwrap();
    assert_eq!(value, serde_json::json!({ "outFile": "build/v1.0.0/addon-v1.0.0.zip" }));
}
