use super::{ApiRequest, Pagination, segment};
use crate::api::fields::Field;
use crate::api::query::QueryParams;
use crate::error::ValidationError;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListLawsRequest {
    /// 法律類別，例: 母法
    pub law_category: Option<String>,
    /// 法律狀態，例: 現行
    pub law_status: Option<String>,
    /// 法律名稱
    pub law_name: Option<String>,
    /// 主管機關
    pub law_authority: Option<String>,
    /// 只回傳指定欄位
    #[serde(default)]
    pub output_fields: Vec<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApiRequest for ListLawsRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok("/laws".to_string())
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        let query = QueryParams::new()
            .with(Field::LawCategory, self.law_category.as_deref())
            .with(Field::LawStatus, self.law_status.as_deref())
            .with(Field::LawName, self.law_name.as_deref())
            .with(Field::LawAuthority, self.law_authority.as_deref())
            .with_list(Field::OutputFields, &self.output_fields);
        self.pagination.apply(query)
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetLawRequest {
    /// 法律編號，必填，例: 01254
    pub law_id: String,
}

impl ApiRequest for GetLawRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!("/laws/{}", segment("law_id", &self.law_id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_laws_query() {
        let request = ListLawsRequest {
            law_status: Some("現行".to_string()),
            ..Default::default()
        };
        let query = request.query().expect("valid request");
        assert_eq!(query.len(), 3);
        assert_eq!(query.get("法律狀態"), Some("現行"));
    }

    #[test]
    fn test_get_law_path() {
        let request = GetLawRequest {
            law_id: "01254".to_string(),
        };
        assert_eq!(request.path(), Ok("/laws/01254".to_string()));
    }
}
