//! Environment variable handling for the configuration pipeline
//!
//! The pipeline never touches the process environment directly. Everything
//! goes through an [`EnvironmentProvider`] handed in at the entry point, so
//! resolution stays pure and tests can feed a fixed variable set.

use std::path::PathBuf;

/// Pipeline input variable names
pub mod keys {
    pub const DEV: &str = "DEV";
    pub const WATCH: &str = "WATCH";
    pub const VERSION: &str = "VERSION";
    pub const DEV_BEHAVIOR_PACKS_DIR: &str = "DEV_BEHAVIOR_PACKS_DIR";
    pub const DEV_RESOURCE_PACKS_DIR: &str = "DEV_RESOURCE_PACKS_DIR";
}

/// Values that turn a flag off even though the variable is set
const FALSY_VALUES: &[&str] = &["", "0", "false", "no", "off"];

/// Read access to environment variables
pub trait EnvironmentProvider {
    /// Raw value of a single variable
    fn var(&self, key: &str) -> Option<String>;

    /// Snapshot of every visible variable, for serde-based loaders
    fn vars(&self) -> Vec<(String, String)>;

    /// Value of a variable, treating blank as absent
    fn optional(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.trim().is_empty())
    }

    /// Filesystem path variable, treating blank as absent
    ///
    /// Paths need not be UTF-8, so providers backed by the OS should read the
    /// raw value instead of going through [`var`](Self::var).
    fn path(&self, key: &str) -> Option<PathBuf> {
        self.optional(key).map(PathBuf::from)
    }

    /// Boolean-like variable; absent resolves to `false`
    fn flag(&self, key: &str) -> bool {
        self.var(key).is_some_and(|value| {
            let normalized = value.trim().to_ascii_lowercase();
            !FALSY_VALUES.contains(&normalized.as_str())
        })
    }
}

/// Live implementation backed by the process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveEnvironmentProvider;

impl EnvironmentProvider for LiveEnvironmentProvider {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    // Variables that are not UTF-8 are skipped; none of ours can be one
    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    fn path(&self, key: &str) -> Option<PathBuf> {
        std::env::var_os(key)
            .filter(|value| !value.to_string_lossy().trim().is_empty())
            .map(PathBuf::from)
    }
}

/// Snapshot of the variables the pipeline reads
///
/// Taken once per invocation. Nothing downstream re-reads the environment,
/// watch-mode rebuilds included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnvironment {
    pub dev: bool,
    pub watch: bool,
    pub version: Option<String>,
    pub dev_behavior_packs_dir: Option<PathBuf>,
    pub dev_resource_packs_dir: Option<PathBuf>,
}

impl BuildEnvironment {
    pub fn capture(provider: &dyn EnvironmentProvider) -> Self {
        Self {
            dev: provider.flag(keys::DEV),
            watch: provider.flag(keys::WATCH),
            version: provider.optional(keys::VERSION).map(|v| v.trim().to_string()),
            dev_behavior_packs_dir: provider.path(keys::DEV_BEHAVIOR_PACKS_DIR),
            dev_resource_packs_dir: provider.path(keys::DEV_RESOURCE_PACKS_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
