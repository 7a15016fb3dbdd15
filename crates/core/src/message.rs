// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The message field of a log event.

use serde::{Deserialize, Serialize};
use std::backtrace::{Backtrace, BacktraceStatus};

/// Message carried by an event: a plain string or an error-like value.
///
/// In JSON a plain message is a string and an error-like message is an
/// object: `{"message": "...", "stack": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogMessage {
    Text(String),
    Error {
        #[serde(rename = "message")]
        description: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stack: Option<String>,
    },
}

impl LogMessage {
    /// Error-like message with a description and no stack.
    pub fn error(description: impl Into<String>) -> Self {
        LogMessage::Error {
            description: description.into(),
            stack: None,
        }
    }

    /// Attach a stack to an error-like message. Plain text becomes the description.
    pub fn with_stack(self, stack: impl Into<String>) -> Self {
        let description = match self {
            LogMessage::Text(text) => text,
            LogMessage::Error { description, .. } => description,
        };
        LogMessage::Error {
            description,
            stack: Some(stack.into()),
        }
    }

    /// Capture an error value.
    ///
    /// The stack is the description followed by one `caused by:` line per
    /// `source()` and, when backtraces are enabled (`RUST_BACKTRACE`), the
    /// captured backtrace. An error with no sources and no backtrace has no
    /// stack.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let description = err.to_string();

        let mut causes = String::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push_str("\n    caused by: ");
            causes.push_str(&cause.to_string());
            source = cause.source();
        }

        let backtrace = Backtrace::capture();
        let stack = match backtrace.status() {
            BacktraceStatus::Captured => Some(format!("{description}{causes}\n{backtrace}")),
            _ if !causes.is_empty() => Some(format!("{description}{causes}")),
            _ => None,
        };

        LogMessage::Error { description, stack }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LogMessage::Error { .. })
    }

    /// Text written in the message field: the stack when one is present and
    /// non-empty, otherwise the description or plain text.
    pub fn render(&self) -> &str {
        match self {
            LogMessage::Text(text) => text,
            LogMessage::Error {
                stack: Some(stack), ..
            } if !stack.is_empty() => stack,
            LogMessage::Error { description, .. } => description,
        }
    }
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        LogMessage::Text(text.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        LogMessage::Text(text)
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
