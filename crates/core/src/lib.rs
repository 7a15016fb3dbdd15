// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! linelog: append structured events as pipe-delimited lines to daily files

pub mod clock;
pub mod config;
pub mod env;
mod error;
pub mod event;
pub mod line;
pub mod log_paths;
pub mod log_type;
mod logger;
pub mod message;
pub mod time_fmt;

pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{LoggerConfig, PartialConfig};
pub use error::{ConfigError, LogError};
pub use event::LogEvent;
pub use line::{render_line, split_line, SEPARATOR};
pub use log_type::LogType;
pub use logger::LineLogger;
pub use message::LogMessage;
