//! Manifest synthesis for the behavior and resource packs
//!
//! Both documents come from the same identity, version and display name.
//! Header fields are built by a single helper so the two manifests cannot
//! drift apart within one build.

use crate::addon::identity::{AddonIdentity, ModuleUuids, layout, platform};
use crate::addon::versions::VersionTriple;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A pack's `manifest.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDocument {
    pub format_version: u32,
    pub header: ManifestHeader,
    pub modules: Vec<ModuleDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<BTreeSet<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub name: String,
    pub description: String,
    pub uuid: String,
    pub version: VersionTriple,
    pub min_engine_version: VersionTriple,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ModuleDescriptor {
    Data {
        uuid: String,
        version: VersionTriple,
    },
    Script {
        language: String,
        uuid: String,
        version: VersionTriple,
        entry: String,
    },
    Resources {
        uuid: String,
        version: VersionTriple,
    },
}

impl ModuleDescriptor {
    pub fn uuid(&self) -> &str {
        match self {
            ModuleDescriptor::Data { uuid, .. }
            | ModuleDescriptor::Script { uuid, .. }
            | ModuleDescriptor::Resources { uuid, .. } => uuid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencyDescriptor {
    /// Link to another pack of this add-on by header UUID
    Pack { uuid: String, version: VersionTriple },
    /// Engine-provided script module, pinned by name
    Platform { module_name: String, version: String },
}

/// Both manifests of one build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestPair {
    pub behavior: ManifestDocument,
    pub resource: ManifestDocument,
}

fn header(
    identity: &AddonIdentity,
    uuid: &str,
    version: VersionTriple,
    display_name: &str,
) -> ManifestHeader {
    ManifestHeader {
        name: display_name.to_string(),
        description: identity.description.clone(),
        uuid: uuid.to_string(),
        version,
        min_engine_version: identity.min_engine_version,
    }
}

/// Build the behavior and resource manifests
pub fn synthesize_manifests(
    identity: &AddonIdentity,
    uuids: &ModuleUuids,
    version: VersionTriple,
    display_name: &str,
) -> ManifestPair {
    let behavior = ManifestDocument {
        format_version: platform::MANIFEST_FORMAT_VERSION,
        header: header(identity, uuids.bp_header, version, display_name),
        modules: vec![
            ModuleDescriptor::Data {
                uuid: uuids.bp_data_module.to_string(),
                version,
            },
            ModuleDescriptor::Script {
                language: platform::SCRIPT_LANGUAGE.to_string(),
                uuid: uuids.bp_scripts_module.to_string(),
                version,
                entry: layout::SCRIPT_BUNDLE_ENTRY.to_string(),
            },
        ],
        dependencies: vec![
            DependencyDescriptor::Pack {
                uuid: uuids.rp_header.to_string(),
                version,
            },
            DependencyDescriptor::Platform {
                module_name: platform::SERVER_MODULE.to_string(),
                version: platform::SERVER_MODULE_VERSION.to_string(),
            },
        ],
        capabilities: None,
    };

    let resource = ManifestDocument {
        format_version: platform::MANIFEST_FORMAT_VERSION,
        header: header(identity, uuids.rp_header, version, display_name),
        modules: vec![ModuleDescriptor::Resources {
            uuid: uuids.rp_resources_module.to_string(),
            version,
        }],
        dependencies: Vec::new(),
        capabilities: Some(BTreeSet::from([platform::PBR_CAPABILITY.to_string()])),
    };

    ManifestPair { behavior, resource }
}

#[cfg(test)]
mod tests {
    include!("manifest.test.rs");
}
