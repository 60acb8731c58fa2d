//! Hermetic test environment for E2E testing
//!
//! Creates an isolated project folder, fake live development pack folders,
//! and mock build engines that record what they receive. No real engine,
//! game install, or process environment mutation is involved.

use anyhow::{Context, Result};
use packsmith_lib::addon::EngineOrchestrator;
use packsmith_lib::application::mocks::MockEnvironmentProvider;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Hermetic test environment with mock build engines
pub struct TestEnvironment {
    /// Temporary directory for the test environment
    pub temp_dir: TempDir,
    /// Path to the test environment root
    pub root_path: PathBuf,
    /// Directory holding mock engine scripts
    pub bin_path: PathBuf,
    /// Project root the engine runs in
    pub work_path: PathBuf,
    /// Stand-in for the game's development_behavior_packs folder
    pub dev_behavior_dir: PathBuf,
    /// Stand-in for the game's development_resource_packs folder
    pub dev_resource_dir: PathBuf,
}

/// Mock engine behavior configuration
#[derive(Debug, Clone)]
pub enum MockEngineBehavior {
    /// Record the configuration and exit 0
    Succeed,
    /// Record the configuration, print `error`, exit with `code`
    Fail { code: i32, error: String },
}

impl TestEnvironment {
    /// Create a new hermetic test environment
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root_path = temp_dir.path().to_path_buf();
        let bin_path = root_path.join("bin");
        let work_path = root_path.join("work");
        let dev_behavior_dir = root_path.join("games").join("development_behavior_packs");
        let dev_resource_dir = root_path.join("games").join("development_resource_packs");

        for dir in [&bin_path, &work_path, &dev_behavior_dir, &dev_resource_dir] {
            fs::create_dir_all(dir)?;
        }

        Ok(Self {
            temp_dir,
            root_path,
            bin_path,
            work_path,
            dev_behavior_dir,
            dev_resource_dir,
        })
    }

    /// Environment for a development build pointing at the fake pack folders
    pub fn development_env(&self) -> MockEnvironmentProvider {
        MockEnvironmentProvider::new().development(
            &self.dev_behavior_dir.to_string_lossy(),
            &self.dev_resource_dir.to_string_lossy(),
        )
    }

    /// Write a mock engine script and return an orchestrator that runs it
    pub fn add_mock_engine(
        &self,
        name: &str,
        behavior: MockEngineBehavior,
    ) -> Result<EngineOrchestrator> {
        let script_path = self.bin_path.join(name);
        let script = Self::generate_engine_script(
            name,
            &behavior,
            &self.log_path(name),
            &self.received_path(name),
        );
        fs::write(&script_path, script)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&script_path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&script_path, perms)?;
        }

        Ok(EngineOrchestrator::new(
            script_path.to_string_lossy().into_owned(),
            vec!["build".to_string()],
            self.work_path.clone(),
        ))
    }

    fn generate_engine_script(
        name: &str,
        behavior: &MockEngineBehavior,
        log_path: &Path,
        received_path: &Path,
    ) -> String {
        let exit_code = match behavior {
            MockEngineBehavior::Succeed => "exit 0".to_string(),
            MockEngineBehavior::Fail { code, error } => {
                format!("echo '{}' >&2\nexit {}", error, code)
            }
        };

        format!(
            r#"#!/bin/sh
# Mock build engine: {name}
echo "{name} $* (cwd: $(pwd -P))" >> "{log}"
cat > "{received}"
{exit_code}
"#,
            name = name,
            log = log_path.display(),
            received = received_path.display(),
            exit_code = exit_code,
        )
    }

    fn log_path(&self, engine: &str) -> PathBuf {
        self.root_path.join(format!("{}.log", engine))
    }

    fn received_path(&self, engine: &str) -> PathBuf {
        self.root_path.join(format!("{}.json", engine))
    }

    /// Invocation log of a mock engine, empty if it never ran
    pub fn engine_log(&self, engine: &str) -> Result<String> {
        let path = self.log_path(engine);
        if path.exists() {
            Ok(fs::read_to_string(path)?)
        } else {
            Ok(String::new())
        }
    }

    /// Configuration the mock engine read from stdin
    pub fn received_config(&self, engine: &str) -> Result<serde_json::Value> {
        let path = self.received_path(engine);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("engine '{}' never wrote {}", engine, path.display()))?;
        Ok(serde_json::from_str(&content)?)
    }
}
