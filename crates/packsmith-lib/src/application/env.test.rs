use super::*;
use crate::application::mocks::MockEnvironmentProvider;

#[test]
fn test_flag_absent_is_false() {
    let env = MockEnvironmentProvider::new();
    assert!(!env.flag(keys::DEV));
    assert!(!env.flag(keys::WATCH));
}

#[test]
fn test_flag_truthy_values() {
    for value in ["1", "true", "yes", "TRUE", "on", "anything"] {
        let env = MockEnvironmentProvider::new().with_var("DEV", value);
        assert!(env.flag("DEV"), "expected '{}' to enable the flag", value);
    }
}

#[test]
fn test_flag_falsy_values() {
    for value in ["", "0", "false", "FALSE", " no ", "off"] {
        let env = MockEnvironmentProvider::new().with_var("WATCH", value);
        assert!(!env.flag("WATCH"), "expected '{}' to disable the flag", value);
    }
}

#[test]
fn test_optional_treats_blank_as_absent() {
    let env = MockEnvironmentProvider::new()
        .with_var("VERSION", "   ")
        .with_var("DEV_BEHAVIOR_PACKS_DIR", "/packs/bp");
    assert_eq!(env.optional("VERSION"), None);
    assert_eq!(env.optional("MISSING"), None);
    assert_eq!(
        env.optional("DEV_BEHAVIOR_PACKS_DIR"),
        Some("/packs/bp".to_string())
    );
}

#[test]
fn test_path_treats_blank_as_absent() {
    let env = MockEnvironmentProvider::new()
        .with_var("DEV_BEHAVIOR_PACKS_DIR", " ")
        .with_var("DEV_RESOURCE_PACKS_DIR", "/packs/rp");
    assert_eq!(env.path("DEV_BEHAVIOR_PACKS_DIR"), None);
    assert_eq!(
        env.path("DEV_RESOURCE_PACKS_DIR"),
        Some(PathBuf::from("/packs/rp"))
    );
}

#[test]
fn test_live_snapshot_reads_process_environment() {
    // PATH is set in every test runner this crate targets
    let snapshot = LiveEnvironmentProvider.vars();
    assert!(snapshot.iter().any(|(key, _)| key.eq_ignore_ascii_case("PATH")));
}

#[test]
fn test_capture_empty_environment() {
    let captured = BuildEnvironment::capture(&MockEnvironmentProvider::new());
    assert_eq!(captured, BuildEnvironment::default());
}

#[test]
fn test_capture_full_environment() {
    let env = MockEnvironmentProvider::new()
        .development("/dev/bp", "/dev/rp")
        .with_var("WATCH", "1")
        .with_var("VERSION", " 1.4.2 ");

    let captured = BuildEnvironment::capture(&env);
    assert!(captured.dev);
    assert!(captured.watch);
    assert_eq!(captured.version.as_deref(), Some("1.4.2"));
    assert_eq!(captured.dev_behavior_packs_dir, Some(PathBuf::from("/dev/bp")));
    assert_eq!(captured.dev_resource_packs_dir, Some(PathBuf::from("/dev/rp")));
}
