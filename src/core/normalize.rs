//! Response shaping between the raw upstream JSON and tool output.

use crate::utils::text::{char_count, truncate_chars};
use serde_json::Value;

/// Longest tool output, in characters, before truncation.
pub const MAX_OUTPUT_CHARS: usize = 20_000;

pub const TRUNCATION_NOTICE: &str =
    "⚠️ 回應內容過長，已截斷顯示。請使用 page 與 limit 參數分頁查詢，或以 output_fields 限縮回傳欄位。";

/// Pulls the record list out of an upstream payload.
///
/// `{"data": [...]}` yields the inner list and a bare list is used as-is.
/// Resource listings such as `{"total": 3, "bills": [...]}` are unwrapped
/// through `collection_key`. Anything else yields no records.
pub fn extract_records(payload: &Value, collection_key: Option<&str>) -> Vec<Value> {
    match payload {
        Value::Array(items) => items.clone(),
        Value::Object(map) => {
            if let Some(data) = map.get("data") {
                return match data {
                    Value::Array(items) => items.clone(),
                    Value::Null => Vec::new(),
                    other => vec![other.clone()],
                };
            }
            match collection_key.and_then(|key| map.get(key)) {
                Some(Value::Array(items)) => items.clone(),
                _ => Vec::new(),
            }
        }
        _ => Vec::new(),
    }
}

/// True when a document payload carries nothing to show.
pub fn is_empty_content(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => match map.get("data") {
            Some(data) => is_empty_content(data),
            None => map.is_empty(),
        },
        _ => false,
    }
}

/// Pretty-printed JSON keeping non-ASCII text as-is.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Cuts `text` to [`MAX_OUTPUT_CHARS`] and appends the pagination notice.
pub fn truncate_output(text: String) -> String {
    truncate_output_at(text, MAX_OUTPUT_CHARS)
}

pub fn truncate_output_at(text: String, max_chars: usize) -> String {
    match truncate_chars(&text, max_chars) {
        Some(head) => {
            tracing::debug!(
                original_chars = char_count(&text),
                max_chars,
                "truncating tool output"
            );
            format!("{}\n\n{}", head, TRUNCATION_NOTICE)
        }
        None => text,
    }
}
