// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for config loading.

use std::path::PathBuf;

pub const SERVICE_NAME_VAR: &str = "LINELOG_SERVICE_NAME";
pub const LOG_DIR_VAR: &str = "LINELOG_LOG_DIR";
pub const LOG_LEVEL_VAR: &str = "LINELOG_LOG_LEVEL";

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Service name override
pub fn service_name() -> Option<String> {
    non_empty(SERVICE_NAME_VAR)
}

/// Log directory override
pub fn log_dir() -> Option<PathBuf> {
    non_empty(LOG_DIR_VAR).map(PathBuf::from)
}

/// Log level override (unparsed)
pub fn log_level() -> Option<String> {
    non_empty(LOG_LEVEL_VAR)
}
