// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock source for timestamps and date partitioning.

use chrono::{DateTime, Duration, Local};
use parking_lot::Mutex;
use std::sync::Arc;

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Manually driven clock for tests.
///
/// Clones share the same underlying time, so a test can keep a handle and
/// move time forward after handing a clone to a logger.
#[derive(Debug, Clone)]
pub struct FakeClock {
    current: Arc<Mutex<DateTime<Local>>>,
}

impl FakeClock {
    /// Create a fake clock starting at the current local time.
    pub fn new() -> Self {
        Self::at(Local::now())
    }

    pub fn at(time: DateTime<Local>) -> Self {
        Self {
            current: Arc::new(Mutex::new(time)),
        }
    }

    pub fn set(&self, time: DateTime<Local>) {
        *self.current.lock() = time;
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock();
        *current += by;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Local> {
        *self.current.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
