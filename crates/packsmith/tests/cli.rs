//! Binary-level tests: environment in, configuration JSON out

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn packsmith(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("packsmith").unwrap();
    cmd.current_dir(project.path())
        .env_clear()
        .env("PACKSMITH_LOG_LEVEL", "0");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_production_build_prints_configuration() {
    let project = TempDir::new().unwrap();
    let output = packsmith(&project)
        .env("VERSION", "1.2.3")
        .assert()
        .success()
        .get_output()
        .clone();

    let config = stdout_json(&output);
    assert_eq!(
        config["behaviorPack"]["manifest"]["header"]["name"],
        "Untitled Add-on v1.2.3"
    );
    assert_eq!(config["archive"].as_array().unwrap().len(), 2);
}

#[test]
fn test_missing_version_defaults() {
    let project = TempDir::new().unwrap();
    packsmith(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("untitled-addon-v0.0.1.mcaddon"));
}

#[test]
fn test_invalid_version_fails() {
    let project = TempDir::new().unwrap();
    packsmith(&project)
        .env("VERSION", "1.2")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid version '1.2'"));
}

#[test]
fn test_development_without_pack_dirs_fails() {
    let project = TempDir::new().unwrap();
    packsmith(&project)
        .env("DEV", "1")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("DEV_BEHAVIOR_PACKS_DIR"));
}

#[cfg(unix)]
#[test]
fn test_dotenv_files_feed_the_pipeline() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join(".env"),
        "DEV=1\nDEV_BEHAVIOR_PACKS_DIR=/games/bp\nDEV_RESOURCE_PACKS_DIR=/games/rp\nVERSION=0.9.0\n",
    )
    .unwrap();
    fs::write(
        project.path().join(".env.local"),
        "DEV_RESOURCE_PACKS_DIR=/local/rp\n",
    )
    .unwrap();

    let output = packsmith(&project).assert().success().get_output().clone();
    let config = stdout_json(&output);

    assert_eq!(
        config["behaviorPack"]["manifest"]["header"]["name"],
        "Untitled Add-on DEV"
    );
    assert_eq!(
        config["behaviorPack"]["targetDir"][1],
        "/games/bp/untitled-addon-bp-dev"
    );
    assert_eq!(
        config["resourcePack"]["targetDir"][1],
        "/local/rp/untitled-addon-rp-dev"
    );
}

#[test]
fn test_process_environment_beats_dotenv() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join(".env"), "VERSION=0.9.0\n").unwrap();

    packsmith(&project)
        .env("VERSION", "3.0.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("build/v3.0.0/bp"));
}

#[cfg(unix)]
#[test]
fn test_unrelated_non_utf8_variable_is_ignored() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let project = TempDir::new().unwrap();
    packsmith(&project)
        .env("UNRELATED", OsStr::from_bytes(b"caf\xe9"))
        .env("VERSION", "1.0.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("build/v1.0.0/bp"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_dev_dir_is_not_reported_missing() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let project = TempDir::new().unwrap();
    packsmith(&project)
        .env("DEV", "1")
        .env("DEV_BEHAVIOR_PACKS_DIR", OsStr::from_bytes(b"/games/b\xe9"))
        .env("DEV_RESOURCE_PACKS_DIR", "/games/rp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not set").not());
}

#[test]
fn test_level_names_are_accepted() {
    let project = TempDir::new().unwrap();
    packsmith(&project)
        .env("PACKSMITH_LOG_LEVEL", "warning")
        .assert()
        .success();
}

#[test]
fn test_dotenv_files_read_from_workdir() {
    let project = TempDir::new().unwrap();
    let addon = project.path().join("addon");
    fs::create_dir(&addon).unwrap();
    fs::write(addon.join(".env"), "VERSION=4.5.6\n").unwrap();
    fs::write(project.path().join(".env"), "VERSION=0.9.0\n").unwrap();

    packsmith(&project)
        .env("PACKSMITH_WORKDIR", "addon")
        .assert()
        .success()
        .stdout(predicate::str::contains("build/v4.5.6/bp"));
}
