use super::ApiRequest;
use crate::error::ValidationError;

/// Aggregate statistics for the whole data set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatRequest;

impl ApiRequest for StatRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok("/stat".to_string())
    }
}
