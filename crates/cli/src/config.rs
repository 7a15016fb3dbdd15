// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line configuration layer.
//!
//! Precedence, lowest to highest: defaults, `--config` file, `LINELOG_*`
//! environment, command-line flags.

use anyhow::{Context, Result};
use clap::Args;
use linelog::{LogType, LoggerConfig, PartialConfig};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// TOML config file (serviceName, logDir, logLevel)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Service name written on every line
    #[arg(long, global = true, value_name = "NAME")]
    pub service: Option<String>,

    /// Directory for daily log files
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Configured level (DEBUG, INFO, ERROR); recorded, not used for filtering
    #[arg(long, global = true, value_name = "LEVEL")]
    pub level: Option<LogType>,
}

impl GlobalArgs {
    /// The flag layer.
    pub fn overrides(&self) -> PartialConfig {
        PartialConfig {
            service_name: self.service.clone(),
            log_dir: self.log_dir.clone(),
            log_level: self.level.map(|l| l.to_string()),
        }
    }
}

pub fn load(args: &GlobalArgs) -> Result<LoggerConfig> {
    let config = LoggerConfig::load_with(args.config.as_deref(), args.overrides())
        .context("invalid configuration")?;
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
