//! Typed parameter sets for every upstream operation.
//!
//! Each request knows the path it targets and how its filters translate into
//! upstream query keys. Path identifiers are validated here; everything else
//! goes through [`QueryParams`].

use crate::api::query::{QueryParams, default_limit, default_page};
use crate::error::ValidationError;
use crate::utils::validation::validate_identifier;
use rmcp::schemars;
use serde::Deserialize;

pub mod bills;
pub mod committees;
pub mod gazettes;
pub mod interpellations;
pub mod ivods;
pub mod laws;
pub mod legislators;
pub mod meets;
pub mod stat;

pub trait ApiRequest {
    /// Path below the API base URL, identifiers already validated.
    fn path(&self) -> Result<String, ValidationError>;

    /// Query pairs; detail lookups send none.
    fn query(&self) -> Result<QueryParams, ValidationError> {
        Ok(QueryParams::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
pub struct Pagination {
    /// 頁數，從 1 開始 (預設 1)
    #[serde(default = "default_page")]
    pub page: u32,
    /// 每頁筆數 (預設 20)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    pub fn apply(&self, query: QueryParams) -> Result<QueryParams, ValidationError> {
        query.paginate(self.page, self.limit)
    }
}

/// Validates one identifier as a single path segment. Encoding happens in the client.
pub(crate) fn segment(field: &str, value: &str) -> Result<String, ValidationError> {
    validate_identifier(field, value)
}

pub(crate) fn term_segment(term: u32) -> Result<String, ValidationError> {
    if term == 0 {
        return Err(ValidationError::InvalidIdentifier {
            field: "term".to_string(),
            value: term.to_string(),
        });
    }
    Ok(term.to_string())
}
