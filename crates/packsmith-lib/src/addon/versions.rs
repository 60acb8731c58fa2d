//! Version resolution for add-on builds
//!
//! Manifests carry versions as `[major, minor, patch]` arrays, so anything
//! semver allows beyond three plain integers (pre-release tags, build
//! metadata) is rejected rather than silently dropped.

use crate::primitives::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Used when no version is supplied
pub const FALLBACK_VERSION: &str = "0.0.1";

/// Three-component version, serialized as a JSON array
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[u64; 3]", into = "[u64; 3]")]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTriple {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `major.minor.patch`, each a non-negative integer
    ///
    /// Components must be canonical: `1.02.3` is rejected rather than read as
    /// `1.2.3`, so a parsed version always prints back as its input.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidVersion {
            value: raw.to_string(),
            reason,
        };

        let version = semver::Version::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if !version.pre.is_empty() || !version.build.is_empty() {
            return Err(invalid(
                "expected exactly three dot-separated integers".to_string(),
            ));
        }

        Ok(Self::new(version.major, version.minor, version.patch))
    }

    /// Display label, e.g. `v1.2.3`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for VersionTriple {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u64; 3]> for VersionTriple {
    fn from([major, minor, patch]: [u64; 3]) -> Self {
        Self::new(major, minor, patch)
    }
}

impl From<VersionTriple> for [u64; 3] {
    fn from(version: VersionTriple) -> Self {
        [version.major, version.minor, version.patch]
    }
}

/// Resolve the build version, falling back to [`FALLBACK_VERSION`]
pub fn resolve_version(raw: Option<&str>) -> Result<VersionTriple, ConfigError> {
    VersionTriple::parse(raw.unwrap_or(FALLBACK_VERSION))
}

#[cfg(test)]
mod tests {
    include!("versions.test.rs");
}
