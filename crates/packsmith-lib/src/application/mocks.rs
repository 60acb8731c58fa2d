//! Mock providers for testing
//!
//! Lets the pipeline run against a fixed variable set without mutating the
//! process environment, which is shared across parallel tests.

use crate::addon::orchestrator::{BuildOrchestrator, OrchestratorError};
use crate::addon::pipeline::BuildConfiguration;
use crate::application::env::EnvironmentProvider;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

/// In-memory environment provider
#[derive(Debug, Clone, Default)]
pub struct MockEnvironmentProvider {
    pub vars: BTreeMap<String, String>,
}

impl MockEnvironmentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Development flag plus both live pack folders
    pub fn development(self, behavior_dir: &str, resource_dir: &str) -> Self {
        self.with_var("DEV", "1")
            .with_var("DEV_BEHAVIOR_PACKS_DIR", behavior_dir)
            .with_var("DEV_RESOURCE_PACKS_DIR", resource_dir)
    }
}

impl EnvironmentProvider for MockEnvironmentProvider {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Orchestrator that records every configuration it receives
#[derive(Debug, Default)]
pub struct RecordingOrchestrator {
    pub received: Mutex<Vec<BuildConfiguration>>,
}

impl RecordingOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.received.lock().map(|r| r.len()).unwrap_or(0)
    }
}

impl BuildOrchestrator for RecordingOrchestrator {
    fn build<'a>(
        &'a self,
        config: &'a BuildConfiguration,
    ) -> Pin<Box<dyn Future<Output = Result<(), OrchestratorError>> + Send + 'a>> {
        Box::pin(async move {
            if let Ok(mut received) = self.received.lock() {
                received.push(config.clone());
            }
            Ok(())
        })
    }
}
