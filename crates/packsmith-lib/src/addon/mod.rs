pub mod identity;
pub mod manifest;
pub mod mode;
pub mod orchestrator;
pub mod pipeline;
pub mod targets;
pub mod versions;

// Re-export main types for convenience
pub use identity::{AddonIdentity, MODULE_UUIDS, ModuleUuids};
pub use manifest::{ManifestDocument, ManifestPair, synthesize_manifests};
pub use orchestrator::{BuildOrchestrator, EngineOrchestrator, StdoutOrchestrator, run_build};
pub use pipeline::{BuildConfiguration, resolve_configuration};
pub use targets::{ArchiveRequest, TargetPlan};
pub use versions::VersionTriple;

// Re-export primitives types for convenience
pub use crate::primitives::BuildMode;
