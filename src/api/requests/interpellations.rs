use super::{ApiRequest, Pagination, segment};
use crate::api::fields::Field;
use crate::api::query::QueryParams;
use crate::error::ValidationError;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListInterpellationsRequest {
    /// 質詢委員姓名
    pub interpellation_member: Option<String>,
    /// 屆期
    pub term: Option<u32>,
    /// 會期
    pub session: Option<u32>,
    /// 會議代碼
    pub meeting_code: Option<String>,
    /// 只回傳指定欄位
    #[serde(default)]
    pub output_fields: Vec<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApiRequest for ListInterpellationsRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok("/interpellations".to_string())
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        let query = QueryParams::new()
            .with(Field::InterpellationMember, self.interpellation_member.as_deref())
            .with(Field::Term, self.term)
            .with(Field::Session, self.session)
            .with(Field::MeetingCode, self.meeting_code.as_deref())
            .with_list(Field::OutputFields, &self.output_fields);
        self.pagination.apply(query)
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetInterpellationRequest {
    /// 質詢編號，必填，例: 11-1-1-1
    pub interpellation_id: String,
}

impl ApiRequest for GetInterpellationRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!(
            "/interpellations/{}",
            segment("interpellation_id", &self.interpellation_id)?
        ))
    }
}
