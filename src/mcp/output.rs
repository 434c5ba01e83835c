//! Tool result rendering.
//!
//! Every tool answers with text: a success marker followed by pretty JSON,
//! or a failure marker followed by a localized message. Failures are still
//! well-formed results, flagged through `is_error`.

use crate::AppError;
use crate::api::models::{Envelope, SUCCESS_MESSAGE};
use crate::core::normalize::{MAX_OUTPUT_CHARS, pretty_json, truncate_output};
use crate::error::{ErrorSeverity, ServiceError};
use crate::utils::text::char_count;
use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

pub const SUCCESS_MARK: &str = "✅";
pub const FAILURE_MARK: &str = "❌";

pub fn success_text(value: &Value) -> String {
    truncate_output(format!(
        "{} {}\n\n{}",
        SUCCESS_MARK,
        SUCCESS_MESSAGE,
        pretty_json(value)
    ))
}

pub fn failure_text(error: &AppError) -> String {
    format!("{} {}", FAILURE_MARK, error.display_friendly())
}

pub fn empty_document_text(bill_no: &str) -> String {
    format!(
        "{} 查無文件內容：議案 {} 目前沒有可用的文件。可能原因：議案尚未產生正式文件、文件尚未數位化，或資料更新延遲。",
        SUCCESS_MARK, bill_no
    )
}

/// Envelope rendered behind its marker. Oversized listings drop trailing
/// records so the JSON after the marker always parses.
pub fn envelope_text(envelope: &Envelope) -> String {
    if !envelope.is_success() {
        return format!("{} {}", FAILURE_MARK, envelope.message());
    }

    let mut envelope = envelope.clone();
    loop {
        let text = match serde_json::to_value(&envelope) {
            Ok(value) => format!(
                "{} {}\n\n{}",
                SUCCESS_MARK,
                envelope.message(),
                pretty_json(&value)
            ),
            Err(e) => {
                return failure_text(&AppError::Service(ServiceError::Serialization {
                    message: e.to_string(),
                }));
            }
        };
        let records = envelope.data().and_then(Value::as_array).map_or(0, Vec::len);
        if char_count(&text) <= MAX_OUTPUT_CHARS || !envelope.truncate_records(records / 2) {
            return truncate_output(text);
        }
    }
}

/// JSON part of an envelope text, after the marker line.
pub fn envelope_json(text: &str) -> Option<&str> {
    text.split_once("\n\n").map(|(_, json)| json)
}

pub fn success(value: &Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(success_text(value))])
}

pub fn failure(tool: &str, error: &AppError) -> CallToolResult {
    let endpoint = match error {
        AppError::Api(api_error) => api_error.endpoint(),
        _ => "-",
    };
    match error.severity() {
        ErrorSeverity::Critical | ErrorSeverity::High => {
            tracing::error!(tool, endpoint, error = %error, "tool call failed")
        }
        ErrorSeverity::Medium => {
            tracing::warn!(tool, endpoint, error = %error, "tool call failed")
        }
        ErrorSeverity::Low => tracing::info!(tool, endpoint, error = %error, "tool call failed"),
    }
    CallToolResult::error(vec![Content::text(failure_text(error))])
}

pub fn envelope(envelope: &Envelope) -> CallToolResult {
    let content = vec![Content::text(envelope_text(envelope))];
    if envelope.is_success() {
        CallToolResult::success(content)
    } else {
        CallToolResult::error(content)
    }
}

pub fn from_result(tool: &str, result: Result<Value, AppError>) -> CallToolResult {
    match result {
        Ok(value) => success(&value),
        Err(error) => failure(tool, &error),
    }
}

/// Joined text of a tool result's text content.
pub fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|content| content.as_text().map(|t| t.text.clone()))
        .collect::<Vec<_>>()
        .join("\n")
}
