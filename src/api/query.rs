use crate::api::fields::Field;
use crate::error::ValidationError;
use crate::utils::validation::{validate_date, validate_pagination};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;

/// Ordered query-string pairs keyed by upstream field names.
///
/// Absent and blank values never make it into the pairs, so the keys sent
/// are exactly the filters the caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<V: ToString>(mut self, field: Field, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(field, value.to_string());
        }
        self
    }

    /// Adds a date filter after checking it is a full `YYYY-MM-DD` date.
    /// Partial dates such as `2024` or `2024-03` are rejected.
    pub fn with_date(self, field: Field, value: Option<&str>) -> Result<Self, ValidationError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(date) => {
                validate_date(field.logical_name(), date)?;
                Ok(self.with(field, Some(date)))
            }
            None => Ok(self),
        }
    }

    /// List values are sent as a repeated key.
    pub fn with_list(mut self, field: Field, values: &[String]) -> Self {
        for value in values {
            self.push(field, value.clone());
        }
        self
    }

    pub fn paginate(self, page: u32, limit: u32) -> Result<Self, ValidationError> {
        validate_pagination(page, limit)?;
        Ok(self
            .with(Field::Page, Some(page))
            .with(Field::Limit, Some(limit)))
    }

    fn push(&mut self, field: Field, value: String) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        self.pairs
            .push((field.external_name().to_string(), value.to_string()));
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Stable text form used for logging and as a cache key.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub fn default_page() -> u32 {
    DEFAULT_PAGE
}

pub fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
