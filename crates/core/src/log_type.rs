// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event severity tags.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity tag written as the first field of every line.
///
/// The configured level of a logger is one of these as well, but it is
/// informational only: events of every type are written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogType {
    Debug,
    #[default]
    Info,
    Error,
}

impl LogType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogType::Debug => "DEBUG",
            LogType::Info => "INFO",
            LogType::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogType::Debug),
            "INFO" => Ok(LogType::Info),
            "ERROR" => Ok(LogType::Error),
            _ => Err(ConfigError::InvalidLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "log_type_tests.rs"]
mod tests;
