//! # packsmith Library
//!
//! Build configuration for Minecraft Bedrock add-ons.
//!
//! Reads build signals from the environment, resolves the version, synthesizes
//! the behavior and resource pack manifests, plans output folders and
//! archives, then hands the result to an external build engine.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types and errors
//! - [`application`] - Environment access, configuration and dotenv loading
//! - [`logger`] - Structured logging
//! - [`addon`] - Configuration resolution pipeline and engine handoff
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! packsmith_lib::main().await
//! # }
//! ```

pub mod addon;
pub mod application;
pub mod logger;
pub mod primitives;

// Re-export commonly used types for convenience
pub use addon::{BuildConfiguration, BuildOrchestrator, resolve_configuration, run_build};
pub use application::{AppConfig, EnvironmentProvider, LiveEnvironmentProvider};
pub use logger::Logger;
pub use primitives::{BuildMode, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError};

use addon::{AddonIdentity, EngineOrchestrator, StdoutOrchestrator};
use anyhow::Result;
use tracing::debug;

pub async fn main() -> Result<()> {
    // 1. Dotenv files in the project root, never overriding the process env
    let provider = LiveEnvironmentProvider;
    let cwd = std::env::current_dir().map_err(ConfigError::from)?;
    let root = application::project_root(&provider, &cwd);
    let env_files = application::load_env_files(&root)?;

    // 2. Ambient configuration and logging
    let config = AppConfig::load(&provider)?;
    Logger::init(config.to_logger_config())?;
    debug!(root = %root.display(), files = ?env_files, "Loaded environment files");

    // 3. Resolve once and hand off
    let workdir = config.workdir.clone().unwrap_or(root);
    let orchestrator: Box<dyn BuildOrchestrator> = match config.engine_command() {
        Some((program, args)) => Box::new(EngineOrchestrator::new(program, args, workdir)),
        None => Box::new(StdoutOrchestrator),
    };

    run_build(&provider, AddonIdentity::default(), orchestrator.as_ref()).await?;
    Ok(())
}
