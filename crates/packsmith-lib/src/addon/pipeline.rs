//! Configuration resolution pipeline
//!
//! environment -> mode + version -> display name -> manifests + target plan.
//! Runs once per invocation and either yields a complete
//! [`BuildConfiguration`] or fails before anything reaches the engine.

use crate::addon::identity::{AddonIdentity, MODULE_UUIDS, layout};
use crate::addon::manifest::{ManifestDocument, ManifestPair, synthesize_manifests};
use crate::addon::mode::{display_name, resolve_mode};
use crate::addon::targets::{ArchiveRequest, TargetPlan};
use crate::addon::versions::{VersionTriple, resolve_version};
use crate::application::env::{BuildEnvironment, EnvironmentProvider};
use crate::primitives::{BuildMode, ConfigError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Everything the build engine needs, resolved once and read-only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfiguration {
    pub identity: AddonIdentity,
    pub mode: BuildMode,
    pub version: VersionTriple,
    pub display_name: String,
    pub manifests: ManifestPair,
    pub behavior_src_dir: PathBuf,
    pub resource_src_dir: PathBuf,
    pub targets: TargetPlan,
    pub watch: bool,
}

/// Resolve the configuration from an injected environment
pub fn resolve_configuration(
    provider: &dyn EnvironmentProvider,
    identity: AddonIdentity,
) -> Result<BuildConfiguration, ConfigError> {
    resolve(&BuildEnvironment::capture(provider), identity)
}

/// Resolve the configuration from an environment snapshot
pub fn resolve(
    env: &BuildEnvironment,
    identity: AddonIdentity,
) -> Result<BuildConfiguration, ConfigError> {
    let resolution = resolve_mode(env);
    let version = resolve_version(env.version.as_deref())?;
    info!(
        mode = %resolution.mode,
        version = %version,
        watch = resolution.watch,
        "Resolved build mode"
    );

    let name = display_name(&identity, resolution.mode, &version);
    let manifests = synthesize_manifests(&identity, &MODULE_UUIDS, version, &name);
    let targets = TargetPlan::build(resolution.mode, &identity.slug, &version, env)?;

    debug!(
        behavior = ?targets.behavior_output_dirs,
        resource = ?targets.resource_output_dirs,
        archives = targets.archive_requests.len(),
        "Planned build outputs"
    );

    Ok(BuildConfiguration {
        identity,
        mode: resolution.mode,
        version,
        display_name: name,
        manifests,
        behavior_src_dir: PathBuf::from(layout::BEHAVIOR_SRC_DIR),
        resource_src_dir: PathBuf::from(layout::RESOURCE_SRC_DIR),
        targets,
        watch: resolution.watch,
    })
}

// ============================================================================
// ENGINE INPUT (wire shape handed to the build engine)
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineInput<'a> {
    pub behavior_pack: BehaviorPackInput<'a>,
    pub resource_pack: ResourcePackInput<'a>,
    pub watch: bool,
    pub archive: &'a [ArchiveRequest],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorPackInput<'a> {
    pub src_dir: &'a Path,
    pub target_dir: &'a [PathBuf],
    pub manifest: &'a ManifestDocument,
    pub scripts: ScriptsInput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptsInput {
    pub entry: &'static str,
    /// Bundle every import into a single output file
    pub bundle: bool,
    pub source_map: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePackInput<'a> {
    pub src_dir: &'a Path,
    pub target_dir: &'a [PathBuf],
    pub manifest: &'a ManifestDocument,
    /// Keep `texture_list.json` in sync with the texture folder
    pub generate_texture_list: bool,
}

impl BuildConfiguration {
    pub fn engine_input(&self) -> EngineInput<'_> {
        EngineInput {
            behavior_pack: BehaviorPackInput {
                src_dir: &self.behavior_src_dir,
                target_dir: &self.targets.behavior_output_dirs,
                manifest: &self.manifests.behavior,
                scripts: ScriptsInput {
                    entry: layout::SCRIPT_SOURCE_ENTRY,
                    bundle: true,
                    source_map: self.mode.source_maps(),
                },
            },
            resource_pack: ResourcePackInput {
                src_dir: &self.resource_src_dir,
                target_dir: &self.targets.resource_output_dirs,
                manifest: &self.manifests.resource,
                generate_texture_list: true,
            },
            watch: self.watch,
            archive: &self.targets.archive_requests,
        }
    }

    /// Pretty JSON of the engine input
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.engine_input())
    }
}

#[cfg(test)]
mod tests {
    include!("pipeline.test.rs");
}
