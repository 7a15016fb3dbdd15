// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger configuration.
//!
//! A [`LoggerConfig`] can be built directly in code, or loaded in layers:
//! defaults, then an optional TOML file, then `LINELOG_*` environment
//! variables (highest precedence).

use crate::env;
use crate::error::ConfigError;
use crate::log_paths::DEFAULT_LOG_DIR;
use crate::log_type::LogType;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Construction-time settings for a [`LineLogger`](crate::LineLogger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Identifies the service on every line. Must be non-empty.
    pub service_name: String,
    /// Directory for the daily files; relative paths are anchored at the
    /// working directory when the logger is built.
    pub log_dir: PathBuf,
    /// Accepted and exposed, but events are not filtered by it.
    pub log_level: LogType,
}

impl LoggerConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: LogType::default(),
        }
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    pub fn with_log_level(mut self, log_level: LogType) -> Self {
        self.log_level = log_level;
        self
    }

    /// Load configuration from an optional TOML file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, PartialConfig::default())
    }

    /// Like [`load`](Self::load), with `overrides` layered above the environment.
    pub fn load_with(path: Option<&Path>, overrides: PartialConfig) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => PartialConfig::read(path)?,
            None => PartialConfig::default(),
        };
        file.merge(PartialConfig::from_env())
            .merge(overrides)
            .resolve()
    }
}

/// One configuration layer; unset keys fall through to lower layers.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    #[serde(rename = "serviceName", alias = "service_name", default)]
    pub service_name: Option<String>,
    #[serde(rename = "logDir", alias = "log_dir", default)]
    pub log_dir: Option<PathBuf>,
    #[serde(rename = "logLevel", alias = "log_level", default)]
    pub log_level: Option<String>,
}

impl PartialConfig {
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_env() -> Self {
        Self {
            service_name: env::service_name(),
            log_dir: env::log_dir(),
            log_level: env::log_level(),
        }
    }

    /// Layer `over` on top of `self`.
    pub fn merge(self, over: PartialConfig) -> Self {
        Self {
            service_name: over.service_name.or(self.service_name),
            log_dir: over.log_dir.or(self.log_dir),
            log_level: over.log_level.or(self.log_level),
        }
    }

    /// Fill defaults and validate.
    pub fn resolve(self) -> Result<LoggerConfig, ConfigError> {
        let service_name = self
            .service_name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ConfigError::MissingServiceName)?;
        let log_level = match self.log_level {
            Some(level) => level.parse()?,
            None => LogType::default(),
        };
        Ok(LoggerConfig {
            service_name,
            log_dir: self
                .log_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            log_level,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
