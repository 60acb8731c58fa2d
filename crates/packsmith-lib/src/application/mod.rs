//! Application layer modules
//!
//! Environment access, ambient configuration, and dotenv loading.

pub mod config;
pub mod env;
pub mod loader;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

// Re-export main types for convenience
pub use config::AppConfig;
pub use env::{BuildEnvironment, EnvironmentProvider, LiveEnvironmentProvider};
pub use loader::*;
