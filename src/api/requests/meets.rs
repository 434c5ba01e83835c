use super::{ApiRequest, Pagination, segment};
use crate::api::fields::Field;
use crate::api::query::QueryParams;
use crate::error::ValidationError;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListMeetsRequest {
    /// 屆期
    pub term: Option<u32>,
    /// 會期
    pub session: Option<u32>,
    /// 會議種類，例: 院會、委員會
    pub meeting_type: Option<String>,
    /// 日期，格式 YYYY-MM-DD，須為完整日期 (只給年或年月會被拒絕)
    pub date: Option<String>,
    /// 會議資料中的委員會代碼
    pub committee_code: Option<String>,
    /// 會議代碼
    pub meeting_code: Option<String>,
    /// 只回傳指定欄位
    #[serde(default)]
    pub output_fields: Vec<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApiRequest for ListMeetsRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok("/meets".to_string())
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        let query = QueryParams::new()
            .with(Field::Term, self.term)
            .with(Field::Session, self.session)
            .with(Field::MeetingType, self.meeting_type.as_deref())
            .with_date(Field::Date, self.date.as_deref())?
            .with(Field::CommitteeCode, self.committee_code.as_deref())
            .with(Field::MeetingCode, self.meeting_code.as_deref())
            .with_list(Field::OutputFields, &self.output_fields);
        self.pagination.apply(query)
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetMeetRequest {
    /// 會議編號，必填，例: 院會-11-2-3
    pub meet_id: String,
}

impl ApiRequest for GetMeetRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!("/meets/{}", segment("meet_id", &self.meet_id)?))
    }
}
