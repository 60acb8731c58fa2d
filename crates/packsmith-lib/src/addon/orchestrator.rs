//! Handoff of the resolved configuration to the build engine
//!
//! Bundling, manifest emission, archiving and watch-mode rebuilds all
//! happen on the other side of [`BuildOrchestrator`]. The configuration is
//! handed over exactly once; watch mode reuses it without re-resolving.

use crate::addon::identity::AddonIdentity;
use crate::addon::pipeline::{BuildConfiguration, resolve_configuration};
use crate::application::env::EnvironmentProvider;
use anyhow::Context;
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Engine handoff errors
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("Failed to serialize build configuration: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("Failed to start build engine '{program}': {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },

    #[error("Build engine '{program}' exited with status {code:?}")]
    EngineFailed { program: String, code: Option<i32> },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

/// Consumer of a resolved configuration
pub trait BuildOrchestrator: Send + Sync {
    /// Perform the build; resolves when the engine finishes or settles into watch mode
    fn build<'a>(
        &'a self,
        config: &'a BuildConfiguration,
    ) -> Pin<Box<dyn Future<Output = Result<(), OrchestratorError>> + Send + 'a>>;
}

/// Runs an external engine process and feeds it the configuration on stdin
#[derive(Debug, Clone)]
pub struct EngineOrchestrator {
    program: String,
    args: Vec<String>,
    workdir: PathBuf,
}

impl EngineOrchestrator {
    pub fn new(program: String, args: Vec<String>, workdir: PathBuf) -> Self {
        Self {
            program,
            args,
            workdir,
        }
    }

    async fn run(&self, config: &BuildConfiguration) -> Result<(), OrchestratorError> {
        let payload = config.to_json()?;

        info!(program = %self.program, workdir = %self.workdir.display(), "Starting build engine");
        let mut child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.workdir)
            .stdin(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| OrchestratorError::SpawnFailed {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(payload.as_bytes()).await {
                // An engine that ignores stdin is judged by its exit status alone
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                    debug!("Build engine closed stdin early");
                }
                result => result?,
            }
            // Dropping the handle closes the pipe so the engine sees EOF
            drop(stdin);
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(OrchestratorError::EngineFailed {
                program: self.program.clone(),
                code: status.code(),
            });
        }

        info!("Build engine finished");
        Ok(())
    }
}

impl BuildOrchestrator for EngineOrchestrator {
    fn build<'a>(
        &'a self,
        config: &'a BuildConfiguration,
    ) -> Pin<Box<dyn Future<Output = Result<(), OrchestratorError>> + Send + 'a>> {
        Box::pin(self.run(config))
    }
}

/// Prints the configuration as JSON for an engine driven by hand
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOrchestrator;

impl BuildOrchestrator for StdoutOrchestrator {
    fn build<'a>(
        &'a self,
        config: &'a BuildConfiguration,
    ) -> Pin<Box<dyn Future<Output = Result<(), OrchestratorError>> + Send + 'a>> {
        Box::pin(async move {
            if config.watch {
                warn!("Watch mode requested but no build engine is configured; printing once");
            }
            let payload = config.to_json()?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{payload}")?;
            stdout.flush()?;
            Ok(())
        })
    }
}

/// Resolve the configuration and hand it to `orchestrator` once
///
/// Configuration errors return before the orchestrator is touched.
pub async fn run_build(
    provider: &dyn EnvironmentProvider,
    identity: AddonIdentity,
    orchestrator: &dyn BuildOrchestrator,
) -> anyhow::Result<BuildConfiguration> {
    let config =
        resolve_configuration(provider, identity).context("Failed to resolve build configuration")?;

    orchestrator
        .build(&config)
        .await
        .context("Build engine handoff failed")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    include!("orchestrator.test.rs");
}
