//! Build mode and display name resolution

use crate::addon::identity::AddonIdentity;
use crate::addon::versions::VersionTriple;
use crate::application::env::BuildEnvironment;
use crate::primitives::BuildMode;

/// Suffix that replaces the version label on development installs
pub const DEV_LABEL: &str = "DEV";

/// Mode and watch flag as read from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeResolution {
    pub mode: BuildMode,
    pub watch: bool,
}

/// Resolve mode flags; without an explicit dev flag the build is Production
pub fn resolve_mode(env: &BuildEnvironment) -> ModeResolution {
    let mode = if env.dev {
        BuildMode::Development
    } else {
        BuildMode::Production
    };

    ModeResolution {
        mode,
        watch: env.watch,
    }
}

/// Name shown in-game, identical in both manifest headers
pub fn display_name(identity: &AddonIdentity, mode: BuildMode, version: &VersionTriple) -> String {
    match mode {
        BuildMode::Development => format!("{} {}", identity.display_name_base, DEV_LABEL),
        BuildMode::Production => format!("{} {}", identity.display_name_base, version.label()),
    }
}

#[cfg(test)]
mod tests {
    include!("mode.test.rs");
}
