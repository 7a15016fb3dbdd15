// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `linelog write`: append one event built from flags

use anyhow::{Context, Result};
use clap::Args;
use linelog::{Clock, LineLogger, LogEvent, LogMessage, LogType};

#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Event type (DEBUG, INFO, ERROR)
    #[arg(long = "type", value_name = "TYPE", default_value_t = LogType::Info)]
    pub log_type: LogType,

    /// Message text (the error description when --stack is given)
    #[arg(short, long)]
    pub message: String,

    /// Stack trace; makes the message error-like and is written in its place
    #[arg(long)]
    pub stack: Option<String>,

    /// Correlation id
    #[arg(long, value_name = "ID")]
    pub log_id: Option<String>,

    /// JSON payload
    #[arg(long, value_name = "JSON")]
    pub payload: Option<String>,

    #[arg(long, value_name = "CODE")]
    pub status_code: Option<u16>,

    #[arg(long = "source-url", value_name = "URL")]
    pub source_url: Option<String>,

    #[arg(long = "target-url", value_name = "URL")]
    pub target_url: Option<String>,
}

impl WriteArgs {
    pub fn into_event(self) -> Result<LogEvent> {
        let message = match self.stack {
            Some(stack) => LogMessage::error(self.message).with_stack(stack),
            None => LogMessage::Text(self.message),
        };
        let payload = self
            .payload
            .map(|raw| serde_json::from_str(&raw))
            .transpose()
            .context("invalid --payload JSON")?;

        Ok(LogEvent {
            log_type: self.log_type,
            message: Some(message),
            log_id: self.log_id,
            payload,
            status_code: self.status_code,
            source_url: self.source_url,
            target_url: self.target_url,
        })
    }
}

pub fn handle<C: Clock>(args: WriteArgs, logger: &LineLogger<C>) -> Result<()> {
    let event = args.into_event()?;
    logger.log(&event)?;
    Ok(())
}

#[cfg(test)]
#[path = "write_tests.rs"]
mod tests;
