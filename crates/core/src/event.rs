// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single log event and its builder.

use crate::log_type::LogType;
use crate::message::LogMessage;
use serde::{Deserialize, Serialize};

/// One call's worth of data to log.
///
/// `message` is optional at the type level so that events decoded from
/// external input can be validated at the logging call; every other field is
/// genuinely optional and is omitted from the line when absent.
///
/// JSON field names: `type`, `message`, `logId`, `payload`, `statusCode`,
/// `sourceURL`, `targetURL`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    #[serde(rename = "type", default)]
    pub log_type: LogType,
    #[serde(default)]
    pub message: Option<LogMessage>,
    #[serde(rename = "logId", default, skip_serializing_if = "Option::is_none")]
    pub log_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    #[serde(rename = "statusCode", default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(rename = "sourceURL", default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(rename = "targetURL", default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
}

impl LogEvent {
    pub fn new(log_type: LogType, message: impl Into<LogMessage>) -> Self {
        Self {
            log_type,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn debug(message: impl Into<LogMessage>) -> Self {
        Self::new(LogType::Debug, message)
    }

    pub fn info(message: impl Into<LogMessage>) -> Self {
        Self::new(LogType::Info, message)
    }

    pub fn error(message: impl Into<LogMessage>) -> Self {
        Self::new(LogType::Error, message)
    }

    pub fn with_log_id(mut self, log_id: impl Into<String>) -> Self {
        self.log_id = Some(log_id.into());
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Serialize any value into the payload.
    pub fn try_with_payload<T: Serialize>(self, payload: &T) -> Result<Self, serde_json::Error> {
        Ok(self.with_payload(serde_json::to_value(payload)?))
    }

    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn with_target_url(mut self, url: impl Into<String>) -> Self {
        self.target_url = Some(url.into());
        self
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
