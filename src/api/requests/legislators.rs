use super::{ApiRequest, Pagination, segment, term_segment};
use crate::api::fields::Field;
use crate::api::query::QueryParams;
use crate::error::ValidationError;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListLegislatorsRequest {
    /// 屆期，例: 11
    pub term: Option<u32>,
    /// 黨籍，例: 民主進步黨
    pub party: Option<String>,
    /// 選區名稱，例: 臺北市第1選舉區
    pub district: Option<String>,
    /// 委員姓名
    pub name: Option<String>,
    /// 只回傳指定欄位
    #[serde(default)]
    pub output_fields: Vec<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApiRequest for ListLegislatorsRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok("/legislators".to_string())
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        let query = QueryParams::new()
            .with(Field::Term, self.term)
            .with(Field::Party, self.party.as_deref())
            .with(Field::District, self.district.as_deref())
            .with(Field::LegislatorName, self.name.as_deref())
            .with_list(Field::OutputFields, &self.output_fields);
        self.pagination.apply(query)
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetLegislatorRequest {
    /// 屆期，必填，例: 11
    pub term: u32,
    /// 委員姓名，必填，例: 韓國瑜
    pub name: String,
}

impl ApiRequest for GetLegislatorRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!(
            "/legislators/{}/{}",
            term_segment(self.term)?,
            segment("name", &self.name)?
        ))
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetLegislatorInterpellationsRequest {
    /// 屆期，必填，例: 11
    pub term: u32,
    /// 委員姓名，必填，例: 王美惠
    pub name: String,
    /// 質詢委員姓名
    pub interpellation_member: Option<String>,
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

impl ApiRequest for GetLegislatorInterpellationsRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!(
            "/legislators/{}/{}/interpellations",
            term_segment(self.term)?,
            segment("name", &self.name)?
        ))
    }

    // The upstream also expects the term as a filter on this route.
    fn query(&self) -> Result<QueryParams, ValidationError> {
        let query = QueryParams::new()
            .with(Field::InterpellationMember, self.interpellation_member.as_deref())
            .with(Field::Term, Some(self.term))
            .with(Field::Session, self.session)
            .with(Field::MeetingCode, self.meeting_code.as_deref())
            .with_list(Field::OutputFields, &self.output_fields);
        self.pagination.apply(query)
    }
}
