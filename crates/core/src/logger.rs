// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only, date-partitioned line logger.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::config::LoggerConfig;
use crate::error::LogError;
use crate::event::LogEvent;
use crate::line::render_line;
use crate::log_paths::{daily_log_path, resolve_log_dir};
use crate::log_type::LogType;
use crate::message::LogMessage;
use crate::time_fmt::{format_date, format_timestamp};

/// Writes one pipe-delimited line per event to `<log_dir>/<YYYY-MM-DD>.log`.
///
/// The log directory is created (non-recursively) once, when the logger is
/// built. Each [`log`](Self::log) call opens the day's file in append mode,
/// writes the whole line, and closes it; there is no buffering and no
/// locking between concurrent writers.
///
/// Failures are returned to the caller. Nothing is retried.
#[derive(Debug)]
pub struct LineLogger<C: Clock = SystemClock> {
    service_name: String,
    log_dir: PathBuf,
    level: LogType,
    clock: C,
}

impl LineLogger<SystemClock> {
    /// Build a logger on the system clock.
    pub fn new(config: LoggerConfig) -> Result<Self, LogError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> LineLogger<C> {
    /// Build a logger with an explicit clock.
    ///
    /// Resolves `config.log_dir` against the current working directory and
    /// creates it if missing. Parent directories are not created.
    pub fn with_clock(config: LoggerConfig, clock: C) -> Result<Self, LogError> {
        if config.service_name.trim().is_empty() {
            return Err(LogError::MissingField("serviceName"));
        }

        let cwd = std::env::current_dir().map_err(|e| LogError::io(&config.log_dir, e))?;
        let log_dir = resolve_log_dir(&cwd, &config.log_dir);

        match fs::create_dir(&log_dir) {
            Ok(()) => debug!(path = %log_dir.display(), "created log directory"),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(LogError::io(log_dir, e)),
        }

        Ok(Self {
            service_name: config.service_name,
            log_dir,
            level: config.log_level,
            clock,
        })
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Absolute directory holding the daily files.
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Configured level. Informational only; no event is filtered by it.
    pub fn level(&self) -> LogType {
        self.level
    }

    /// Path of the file for a date string (`YYYY-MM-DD`).
    pub fn log_path_for(&self, date: &str) -> PathBuf {
        daily_log_path(&self.log_dir, date)
    }

    /// Path of the file the next event would be written to.
    pub fn current_log_path(&self) -> PathBuf {
        self.log_path_for(&format_date(&self.clock.now()))
    }

    /// Append one line for `event`.
    ///
    /// Fails with `MissingField("message")`, before touching the filesystem,
    /// when the event carries no message. IO failures are returned as
    /// [`LogError::Io`].
    pub fn log(&self, event: &LogEvent) -> Result<(), LogError> {
        let now = self.clock.now();
        let mut line = render_line(&format_timestamp(&now), &self.service_name, event)?;
        line.push('\n');

        let path = daily_log_path(&self.log_dir, &format_date(&now));
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::io(&path, e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| LogError::io(&path, e))?;

        trace!(
            path = %path.display(),
            service = %self.service_name,
            log_type = %event.log_type,
            "appended log line"
        );
        Ok(())
    }

    pub fn debug(&self, message: impl Into<LogMessage>) -> Result<(), LogError> {
        self.log(&LogEvent::debug(message))
    }

    pub fn info(&self, message: impl Into<LogMessage>) -> Result<(), LogError> {
        self.log(&LogEvent::info(message))
    }

    pub fn error(&self, message: impl Into<LogMessage>) -> Result<(), LogError> {
        self.log(&LogEvent::error(message))
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
