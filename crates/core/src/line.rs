// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of events into pipe-delimited lines.
//!
//! Line format:
//!   `<TYPE> | <YYYY-MM-DD HH:mm:ss> | <service> | <message> [| <logId>] [| <payload>] [| <statusCode>] [| <sourceURL>] [| <targetURL>]`
//!
//! Absent fields are dropped, so field position is only meaningful among the
//! fields that were present. A falsy payload (`null`, `false`, `0`, `""`)
//! counts as absent.

use crate::error::LogError;
use crate::event::LogEvent;
use serde_json::Value;

/// Field separator.
pub const SEPARATOR: &str = " | ";

/// Render `event` into a line (without the trailing newline).
///
/// Fails with `MissingField("message")` if the event has no message or the
/// message renders empty.
pub fn render_line(timestamp: &str, service_name: &str, event: &LogEvent) -> Result<String, LogError> {
    let message = event
        .message
        .as_ref()
        .map(|m| m.render())
        .filter(|m| !m.is_empty())
        .ok_or(LogError::MissingField("message"))?;

    let payload = event
        .payload
        .as_ref()
        .filter(|value| !is_falsy(value))
        .map(Value::to_string);
    let status_code = event.status_code.map(|code| code.to_string());

    let fields = [
        Some(event.log_type.as_str()),
        Some(timestamp),
        Some(service_name),
        Some(message),
        event.log_id.as_deref(),
        payload.as_deref(),
        status_code.as_deref(),
        event.source_url.as_deref(),
        event.target_url.as_deref(),
    ];

    Ok(fields.into_iter().flatten().collect::<Vec<_>>().join(SEPARATOR))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Split a rendered line into its fields.
///
/// Inverse of the join in [`render_line`]: `split_line(l).join(SEPARATOR) == l`.
/// A trailing newline is not part of any field.
pub fn split_line(line: &str) -> Vec<&str> {
    line.strip_suffix('\n').unwrap_or(line).split(SEPARATOR).collect()
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
