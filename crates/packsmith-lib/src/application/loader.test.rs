use super::*;
use crate::application::mocks::MockEnvironmentProvider;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_env_files_are_not_errors() {
    let temp = TempDir::new().unwrap();
    let loaded = load_env_files(temp.path()).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_env_local_takes_precedence_over_env() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".env"),
        "PACKSMITH_LOADER_TEST_SHARED=from-env\nPACKSMITH_LOADER_TEST_ONLY_ENV=base\n",
    )
    .unwrap();
    fs::write(
        temp.path().join(".env.local"),
        "PACKSMITH_LOADER_TEST_SHARED=from-local\n",
    )
    .unwrap();

    let loaded = load_env_files(temp.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(
        std::env::var("PACKSMITH_LOADER_TEST_SHARED").unwrap(),
        "from-local"
    );
    assert_eq!(
        std::env::var("PACKSMITH_LOADER_TEST_ONLY_ENV").unwrap(),
        "base"
    );
}

#[test]
fn test_malformed_env_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".env"), "THIS IS NOT A VALID LINE\n").unwrap();

    match load_env_files(temp.path()) {
        Err(ConfigError::EnvFileError { file, .. }) => assert_eq!(file, ".env"),
        other => panic!("Expected EnvFileError, got {:?}", other),
    }
}

#[test]
fn test_project_root_defaults_to_cwd() {
    let cwd = PathBuf::from("/home/user/addon");
    let root = project_root(&MockEnvironmentProvider::new(), &cwd);
    assert_eq!(root, cwd);
}

#[test]
fn test_project_root_follows_workdir() {
    let cwd = PathBuf::from("/home/user");
    let relative = MockEnvironmentProvider::new().with_var("PACKSMITH_WORKDIR", "addon");
    assert_eq!(
        project_root(&relative, &cwd),
        PathBuf::from("/home/user/addon")
    );

    let absolute = MockEnvironmentProvider::new().with_var("PACKSMITH_WORKDIR", "/srv/addon");
    assert_eq!(project_root(&absolute, &cwd), PathBuf::from("/srv/addon"));
}

#[test]
fn test_load_validates_config() {
    let env = MockEnvironmentProvider::new().with_var("PACKSMITH_ENGINE", "");
    let config = AppConfig::load(&env).unwrap();
    assert_eq!(config.engine, None);
    assert!(config.workdir.is_some());
}
