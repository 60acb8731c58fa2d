//! Fixed project identity
//!
//! Everything here is decided once per project and never derived from the
//! environment. Changing a UUID breaks upgrades for players who already
//! have the add-on installed, so they live in exactly one table.

use crate::addon::versions::VersionTriple;

/// Human and filesystem names of the add-on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonIdentity {
    /// Shown in-game, followed by the version label or `DEV`
    pub display_name_base: String,
    /// Used for output folders and archive names
    pub slug: String,
    pub description: String,
    pub min_engine_version: VersionTriple,
}

impl Default for AddonIdentity {
    fn default() -> Self {
        Self {
            display_name_base: "Untitled Add-on".to_string(),
            slug: "untitled-addon".to_string(),
            description: "No description.".to_string(),
            min_engine_version: VersionTriple::new(1, 21, 110),
        }
    }
}

/// One identifier per manifest header and module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleUuids {
    pub bp_header: &'static str,
    pub bp_data_module: &'static str,
    /// Debuggers attach to the script module by this id
    pub bp_scripts_module: &'static str,
    pub rp_header: &'static str,
    pub rp_resources_module: &'static str,
}

pub const MODULE_UUIDS: ModuleUuids = ModuleUuids {
    bp_header: "7f519716-66c1-4d1c-9bb5-dee36e2cbb6e",
    bp_data_module: "c30672bb-446a-458f-95ed-3b8a6e17c999",
    bp_scripts_module: "9ca92e58-0e77-4117-a0fb-44484dd1418f",
    rp_header: "74c625fe-e814-4e85-a845-4018c1741ac5",
    rp_resources_module: "2f48f6f5-e145-4643-810d-77531a50e249",
};

impl ModuleUuids {
    /// Name/identifier pairs, in manifest order
    pub fn entries(&self) -> [(&'static str, &'static str); 5] {
        [
            ("bp_header", self.bp_header),
            ("bp_data_module", self.bp_data_module),
            ("bp_scripts_module", self.bp_scripts_module),
            ("rp_header", self.rp_header),
            ("rp_resources_module", self.rp_resources_module),
        ]
    }
}

/// Script API the behavior pack is compiled against
pub mod platform {
    pub const SCRIPT_LANGUAGE: &str = "javascript";
    pub const SERVER_MODULE: &str = "@minecraft/server";
    /// Keep in step with the npm package the scripts import
    pub const SERVER_MODULE_VERSION: &str = "2.2.0";
    pub const PBR_CAPABILITY: &str = "pbr";
    pub const MANIFEST_FORMAT_VERSION: u32 = 2;
}

/// Source tree layout of the project
pub mod layout {
    pub const BEHAVIOR_SRC_DIR: &str = "src/bp";
    pub const RESOURCE_SRC_DIR: &str = "src/rp";
    pub const SCRIPT_SOURCE_ENTRY: &str = "src/bp/scripts/index.ts";
    /// Where the bundled script lands inside the behavior pack
    pub const SCRIPT_BUNDLE_ENTRY: &str = "scripts/index.js";
    pub const BUILD_ROOT: &str = "build";
    pub const DEV_BUILD_DIR: &str = "dev";
}

#[cfg(test)]
mod tests {
    include!("identity.test.rs");
}
