use super::*;

#[test]
fn test_absent_flags_resolve_to_production() {
    let resolution = resolve_mode(&BuildEnvironment::default());
    assert_eq!(resolution.mode, BuildMode::Production);
    assert!(!resolution.watch);
}

#[test]
fn test_dev_and_watch_flags() {
    let env = BuildEnvironment {
        dev: true,
        watch: true,
        ..BuildEnvironment::default()
    };
    let resolution = resolve_mode(&env);
    assert_eq!(resolution.mode, BuildMode::Development);
    assert!(resolution.watch);
}

#[test]
fn test_watch_is_independent_of_mode() {
    let env = BuildEnvironment {
        watch: true,
        ..BuildEnvironment::default()
    };
    let resolution = resolve_mode(&env);
    assert_eq!(resolution.mode, BuildMode::Production);
    assert!(resolution.watch);
}

#[test]
fn test_production_display_name_uses_version_label() {
    let name = display_name(
        &AddonIdentity::default(),
        BuildMode::Production,
        &VersionTriple::new(1, 4, 0),
    );
    assert_eq!(name, "Untitled Add-on v1.4.0");
}

#[test]
fn test_development_display_name_ends_with_dev_regardless_of_version() {
    let identity = AddonIdentity::default();
    for version in [VersionTriple::new(0, 0, 1), VersionTriple::new(9, 8, 7)] {
        let name = display_name(&identity, BuildMode::Development, &version);
        assert!(name.ends_with("DEV"));
        assert!(!name.contains(&version.label()));
    }
}
