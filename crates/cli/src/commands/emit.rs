// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `linelog emit`: append newline-delimited JSON events from a reader

use anyhow::{Context, Result};
use linelog::{Clock, LineLogger, LogEvent};
use std::io::BufRead;

/// Log every event read from `reader`, one JSON object per line.
///
/// Blank lines are skipped. Stops at the first line that fails to parse or
/// to log; lines before it stay written. Returns the number of events logged.
pub fn handle<R: BufRead, C: Clock>(reader: R, logger: &LineLogger<C>) -> Result<usize> {
    let mut count = 0;
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let event: LogEvent = serde_json::from_str(&line)
            .with_context(|| format!("line {}: invalid event", line_no))?;
        logger
            .log(&event)
            .with_context(|| format!("line {}", line_no))?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
#[path = "emit_tests.rs"]
mod tests;
