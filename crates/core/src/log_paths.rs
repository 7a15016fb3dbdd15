// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path builders for date-partitioned log files.
//!
//! Structure: `<log_dir>/<YYYY-MM-DD>.log`

use std::path::{Path, PathBuf};

/// Default log directory, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Build the path to the log file for a date string (`YYYY-MM-DD`).
pub fn daily_log_path(log_dir: &Path, date: &str) -> PathBuf {
    log_dir.join(format!("{}.log", date))
}

/// Anchor `log_dir` at `cwd` unless it is already absolute.
pub fn resolve_log_dir(cwd: &Path, log_dir: &Path) -> PathBuf {
    cwd.join(log_dir)
}

#[cfg(test)]
#[path = "log_paths_tests.rs"]
mod tests;
