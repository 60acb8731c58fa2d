//! Configuration loading
//!
//! Coordinates dotenv files and the ambient `PACKSMITH_*` settings.

use crate::primitives::ConfigError;
use std::path::{Path, PathBuf};

use super::{
    config::{AppConfig, WORKDIR_VAR},
    env::EnvironmentProvider,
};

/// Dotenv files, highest precedence first
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Directory holding the project's dotenv files
///
/// `PACKSMITH_WORKDIR` from the process environment, resolved against `cwd`,
/// or `cwd` itself. A workdir set only inside a dotenv file cannot move the
/// search, since that file has not been read yet.
pub fn project_root(provider: &dyn EnvironmentProvider, cwd: &Path) -> PathBuf {
    match provider.path(WORKDIR_VAR) {
        Some(workdir) => cwd.join(workdir),
        None => cwd.to_path_buf(),
    }
}

/// Load dotenv files from `dir` into the process environment
///
/// Variables already set are never overridden, so the process environment
/// wins over `.env.local`, which wins over `.env`. Returns the files that
/// were actually read.
pub fn load_env_files(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let mut loaded = Vec::new();

    for env_file in &ENV_FILES {
        let path = dir.join(env_file);
        match dotenvy::from_path(&path) {
            Ok(()) => loaded.push(path),
            // Missing files are fine; unreadable or malformed ones are not
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }

    Ok(loaded)
}

impl AppConfig {
    /// Load config: defaults -> env vars (including any loaded dotenv files)
    pub fn load(provider: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        let mut config = Self::from_provider(provider)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
