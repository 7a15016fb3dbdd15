// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for logging and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while constructing a logger or appending a line
#[derive(Debug, Error)]
pub enum LogError {
    #[error("the \"{0}\" field is required for logging")]
    MissingField(&'static str),
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LogError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur while loading a [`LoggerConfig`](crate::LoggerConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid log level: {0} (expected DEBUG, INFO or ERROR)")]
    InvalidLevel(String),
    #[error("no service name configured (set serviceName or LINELOG_SERVICE_NAME)")]
    MissingServiceName,
}
