use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Custom deserializer: upstream numbers sometimes arrive as strings
fn deserialize_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => Ok(n.as_u64().and_then(|n| u32::try_from(n).ok())),
        Value::String(s) => Ok(s.trim().parse::<u32>().ok()),
        _ => Ok(None),
    }
}

/// Custom deserializer: text fields sometimes arrive as numbers or booleans
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Ok(Some(other.to_string())),
    }
}

/// Custom deserializer: names come either as one string or a list of strings
fn deserialize_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(vec![s]),
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

// Bill models
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Bill {
    #[serde(rename = "議案編號", default, deserialize_with = "deserialize_lenient_string")]
    pub bill_no: Option<String>,
    #[serde(rename = "議案名稱", default, deserialize_with = "deserialize_lenient_string")]
    pub title: Option<String>,
    #[serde(
        rename = "案由",
        default,
        skip_serializing,
        deserialize_with = "deserialize_lenient_string"
    )]
    pub reason: Option<String>,
    #[serde(rename = "議案類別", default, deserialize_with = "deserialize_lenient_string")]
    pub category: Option<String>,
    #[serde(rename = "屆", default, deserialize_with = "deserialize_lenient_u32")]
    pub term: Option<u32>,
    #[serde(rename = "會期", default, deserialize_with = "deserialize_lenient_u32")]
    pub session: Option<u32>,
    #[serde(rename = "提案人", default, deserialize_with = "deserialize_names")]
    pub proposers: Vec<String>,
    #[serde(rename = "連署人", default, deserialize_with = "deserialize_names")]
    pub cosigners: Vec<String>,
    #[serde(rename = "提案日期", default, deserialize_with = "deserialize_lenient_string")]
    pub proposal_date: Option<String>,
    #[serde(rename = "提案來源", default, deserialize_with = "deserialize_lenient_string")]
    pub proposal_source: Option<String>,
    #[serde(rename = "議案狀態", default, deserialize_with = "deserialize_lenient_string")]
    pub status: Option<String>,
    #[serde(rename = "最新進度日期", default, deserialize_with = "deserialize_lenient_string")]
    pub latest_progress_date: Option<String>,
}

impl Bill {
    /// Builds a typed record from one upstream object; non-objects yield `None`.
    /// Every field is lenient, so an object record always produces a `Bill`.
    pub fn from_record(record: &Value) -> Option<Self> {
        if !record.is_object() {
            return None;
        }
        let mut bill: Bill = serde_json::from_value(record.clone()).ok()?;
        if bill.title.as_deref().is_none_or(|t| t.trim().is_empty()) {
            bill.title = bill.reason.clone();
        }
        Some(bill)
    }
}

/// Response wrapper returned by envelope-style tools.
///
/// Fields are private so a failed envelope can only be built through
/// [`Envelope::failure`], which always leaves `data` empty.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Envelope {
    success: bool,
    message: String,
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    truncated: Option<bool>,
}

pub const SUCCESS_MESSAGE: &str = "查詢成功";

impl Envelope {
    /// Listing result; `total` counts the records in this page only.
    pub fn listing<T: Serialize>(records: &[T], page: u32, limit: u32) -> Self {
        let data = serde_json::to_value(records).unwrap_or(Value::Array(Vec::new()));
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(data),
            total: Some(records.len()),
            page: Some(page),
            limit: Some(limit),
            truncated: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            total: None,
            page: None,
            limit: None,
            truncated: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn total(&self) -> Option<usize> {
        self.total
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated.unwrap_or(false)
    }

    /// Keeps the first `keep` records and marks the envelope truncated.
    /// Returns `false` when there was nothing to drop.
    pub fn truncate_records(&mut self, keep: usize) -> bool {
        match self.data.as_mut() {
            Some(Value::Array(records)) if records.len() > keep => {
                records.truncate(keep);
                self.truncated = Some(true);
                true
            }
            _ => false,
        }
    }
}
