//! Output directory and archive planning
//!
//! Development builds go to a local inspection folder plus the game's live
//! development pack folders. Production builds go to a version-labelled
//! folder and are archived. Only production ever requests archives.

use crate::addon::identity::layout;
use crate::addon::versions::VersionTriple;
use crate::application::env::{BuildEnvironment, keys};
use crate::primitives::{BuildMode, ConfigError};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Distribution archive flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    /// Bundle that the game imports on double-click
    McAddon,
    /// Plain zip for manual installs and marketplaces
    Zip,
}

impl ArchiveFormat {
    pub const ALL: [ArchiveFormat; 2] = [ArchiveFormat::McAddon, ArchiveFormat::Zip];

    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveFormat::McAddon => "mcaddon",
            ArchiveFormat::Zip => "zip",
        }
    }
}

/// One archive for the engine to write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRequest {
    pub out_file: PathBuf,
    #[serde(skip)]
    pub format: ArchiveFormat,
}

/// The game's live development pack folders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevPackDirs {
    pub behavior: PathBuf,
    pub resource: PathBuf,
}

impl DevPackDirs {
    /// Both folders are required; development builds cannot install without them
    pub fn from_environment(env: &BuildEnvironment) -> Result<Self, ConfigError> {
        let missing = |name: &str| ConfigError::MissingEnvironmentVariable {
            name: name.to_string(),
        };

        Ok(Self {
            behavior: env
                .dev_behavior_packs_dir
                .clone()
                .ok_or_else(|| missing(keys::DEV_BEHAVIOR_PACKS_DIR))?,
            resource: env
                .dev_resource_packs_dir
                .clone()
                .ok_or_else(|| missing(keys::DEV_RESOURCE_PACKS_DIR))?,
        })
    }
}

/// Where each pack is written and which archives are produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPlan {
    pub behavior_output_dirs: Vec<PathBuf>,
    pub resource_output_dirs: Vec<PathBuf>,
    pub archive_requests: Vec<ArchiveRequest>,
}

impl TargetPlan {
    /// Plan outputs for `mode`
    ///
    /// In development the live pack folders must be present in `env`;
    /// production ignores them.
    pub fn build(
        mode: BuildMode,
        slug: &str,
        version: &VersionTriple,
        env: &BuildEnvironment,
    ) -> Result<Self, ConfigError> {
        match mode {
            BuildMode::Development => {
                let dirs = DevPackDirs::from_environment(env)?;
                Ok(Self::development(slug, &dirs))
            }
            BuildMode::Production => Ok(Self::production(slug, version)),
        }
    }

    pub fn development(slug: &str, dirs: &DevPackDirs) -> Self {
        let local_root = Path::new(layout::BUILD_ROOT).join(layout::DEV_BUILD_DIR);

        Self {
            behavior_output_dirs: vec![
                local_root.join("bp"),
                dirs.behavior.join(format!("{slug}-bp-dev")),
            ],
            resource_output_dirs: vec![
                local_root.join("rp"),
                dirs.resource.join(format!("{slug}-rp-dev")),
            ],
            archive_requests: Vec::new(),
        }
    }

    pub fn production(slug: &str, version: &VersionTriple) -> Self {
        let label = version.label();
        let root = Path::new(layout::BUILD_ROOT).join(&label);

        let archive_requests = ArchiveFormat::ALL
            .iter()
            .map(|format| ArchiveRequest {
                out_file: root.join(format!("{slug}-{label}.{}", format.extension())),
                format: *format,
            })
            .collect();

        Self {
            behavior_output_dirs: vec![root.join("bp")],
            resource_output_dirs: vec![root.join("rp")],
            archive_requests,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("targets.test.rs");
}
