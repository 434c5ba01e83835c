use super::{ApiRequest, Pagination, segment};
use crate::api::fields::Field;
use crate::api::query::QueryParams;
use crate::error::ValidationError;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListCommitteesRequest {
    /// 委員會類別，例: 常設委員會
    pub committee_type: Option<String>,
    /// 委員會代號，例: 15
    pub comt_cd: Option<String>,
    /// 只回傳指定欄位
    #[serde(default)]
    pub output_fields: Vec<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApiRequest for ListCommitteesRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok("/committees".to_string())
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        let query = QueryParams::new()
            .with(Field::CommitteeType, self.committee_type.as_deref())
            .with(Field::CommitteeId, self.comt_cd.as_deref())
            .with_list(Field::OutputFields, &self.output_fields);
        self.pagination.apply(query)
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetCommitteeRequest {
    /// 委員會代號，必填，例: 15
    pub comt_cd: String,
}

impl ApiRequest for GetCommitteeRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!("/committees/{}", segment("comt_cd", &self.comt_cd)?))
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetCommitteeMeetsRequest {
    /// 委員會代號，必填，例: 15
    pub comt_cd: String,
    /// 屆期
    pub term: Option<u32>,
    /// 會議代碼
    pub meeting_code: Option<String>,
    /// 會期
    pub session: Option<u32>,
    /// 會議種類
    pub meeting_type: Option<String>,
    /// 出席委員
    pub member: Option<String>,
    /// 會議日期，格式 YYYY-MM-DD，須為完整日期 (只給年或年月會被拒絕)
    pub date: Option<String>,
    /// 會議資料中的委員會代碼
    pub committee_code: Option<String>,
    /// 會議編號
    pub meet_id: Option<String>,
    /// 關係文書中的議案編號
    pub bill_no: Option<String>,
    /// 關係文書中的法律編號
    pub law_number: Option<String>,
    /// 只回傳指定欄位
    #[serde(default)]
    pub output_fields: Vec<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApiRequest for GetCommitteeMeetsRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!(
            "/committees/{}/meets",
            segment("comt_cd", &self.comt_cd)?
        ))
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        let query = QueryParams::new()
            .with(Field::Term, self.term)
            .with(Field::MeetingCode, self.meeting_code.as_deref())
            .with(Field::Session, self.session)
            .with(Field::MeetingType, self.meeting_type.as_deref())
            .with(Field::Member, self.member.as_deref())
            .with_date(Field::Date, self.date.as_deref())?
            .with(Field::CommitteeCode, self.committee_code.as_deref())
            .with(Field::MeetId, self.meet_id.as_deref())
            .with(Field::RelatedBillNumber, self.bill_no.as_deref())
            .with(Field::RelatedLawNumber, self.law_number.as_deref())
            .with_list(Field::OutputFields, &self.output_fields);
        self.pagination.apply(query)
    }
}
