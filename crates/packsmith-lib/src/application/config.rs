//! Application configuration management
//!
//! Ambient settings (logging, working directory, build engine) read from
//! `PACKSMITH_*` variables following the precedence:
//! defaults -> .env -> .env.local -> process environment.

use crate::application::env::EnvironmentProvider;
use crate::primitives::*;
use serde::Deserialize;
use std::path::PathBuf;

/// Prefix shared by every ambient variable
pub const ENV_PREFIX: &str = "PACKSMITH_";

/// Project root variable, also consulted before dotenv files are loaded
pub const WORKDIR_VAR: &str = "PACKSMITH_WORKDIR";

/// Default configuration values
pub mod defaults {
    use crate::primitives::{LogFormat, LogLevel, LogOutput};

    pub const LOG_LEVEL: LogLevel = LogLevel::Info; // mode, version and plan are worth seeing
    pub const LOG_FORMAT: LogFormat = LogFormat::Text;
    pub const LOG_OUTPUT: LogOutput = LogOutput::Stderr;
}

/// Default value functions for configuration fields
mod default_fns {
    use super::defaults;
    use crate::primitives::{LogFormat, LogLevel, LogOutput};

    pub fn log_level() -> LogLevel {
        defaults::LOG_LEVEL
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT
    }
}

/// Deserializers for values named by `FromStr` rather than serde
mod value_fns {
    use crate::primitives::LogLevel;
    use serde::{Deserialize, Deserializer, de::Error};
    use std::fmt::Display;
    use std::str::FromStr;

    /// Verbosity number (`0`..`4`) or level name (`debug`, `warning`, ...)
    pub fn log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();
        match raw.parse::<u8>() {
            Ok(verbosity) => Ok(LogLevel::from_verbosity(verbosity)),
            Err(_) => raw.parse().map_err(D::Error::custom),
        }
    }

    pub fn from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        String::deserialize(deserializer)?
            .trim()
            .parse()
            .map_err(D::Error::custom)
    }
}

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Project root that relative output paths resolve against
    #[serde(default)]
    pub workdir: Option<PathBuf>,

    /// Command line of the external build engine
    #[serde(default)]
    pub engine: Option<String>,

    /// Verbosity (0=error, 1=warn, 2=info, 3=debug, 4=trace) or level name
    #[serde(
        default = "default_fns::log_level",
        deserialize_with = "value_fns::log_level"
    )]
    pub log_level: LogLevel,

    /// Output format (text, json, pretty)
    #[serde(
        default = "default_fns::log_format",
        deserialize_with = "value_fns::from_str"
    )]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[serde(
        default = "default_fns::log_output",
        deserialize_with = "value_fns::from_str"
    )]
    pub log_output: LogOutput,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workdir: None,
            engine: None,
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
        }
    }
}

impl AppConfig {
    /// Deserialize the `PACKSMITH_*` variables visible to `provider`
    pub fn from_provider(provider: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        envy::prefixed(ENV_PREFIX)
            .from_iter(provider.vars())
            .map_err(|source| ConfigError::EnvironmentParsingFailed { source })
    }

    /// Create LoggerConfig, deciding colour support for the chosen stream
    pub fn to_logger_config(&self) -> LoggerConfig {
        let color = match self.log_output {
            LogOutput::Stderr => console::colors_enabled_stderr(),
            LogOutput::Stdout => console::colors_enabled(),
        };

        LoggerConfig {
            level: self.log_level,
            format: self.log_format,
            output: self.log_output,
            color,
        }
    }

    /// Engine program and its arguments, split on whitespace
    pub fn engine_command(&self) -> Option<(String, Vec<String>)> {
        let mut parts = self.engine.as_deref()?.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some((program, parts.collect()))
    }

    /// Validate the final configuration
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self
            .engine
            .as_deref()
            .is_some_and(|engine| engine.trim().is_empty())
        {
            self.engine = None;
        }

        // Resolve working directory (simple fallback only)
        if self.workdir.is_none() {
            self.workdir = Some(
                std::env::current_dir().map_err(|e| ConfigError::CurrentDirError { source: e })?,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
