use super::{ApiRequest, Pagination, segment};
use crate::api::fields::Field;
use crate::api::query::QueryParams;
use crate::error::ValidationError;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
pub enum VideoType {
    /// 委員發言片段
    Clip,
    /// 完整會議影片
    Full,
}

impl fmt::Display for VideoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoType::Clip => f.write_str("Clip"),
            VideoType::Full => f.write_str("Full"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListIvodsRequest {
    /// 屆期
    pub term: Option<u32>,
    /// 會期
    pub session: Option<u32>,
    /// 會議代碼
    pub meeting_code: Option<String>,
    /// 委員名稱
    pub member_name: Option<String>,
    /// 委員會代碼
    pub committee_code: Option<String>,
    /// 會議資料中的會議代碼
    pub meeting_code_data: Option<String>,
    /// 日期，格式 YYYY-MM-DD，須為完整日期 (只給年或年月會被拒絕)
    pub date: Option<String>,
    /// 影片種類: Clip 或 Full
    pub video_type: Option<VideoType>,
    /// 只回傳指定欄位
    #[serde(default)]
    pub output_fields: Vec<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApiRequest for ListIvodsRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok("/ivods".to_string())
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        let query = QueryParams::new()
            .with(Field::Term, self.term)
            .with(Field::Session, self.session)
            .with(Field::MeetingCode, self.meeting_code.as_deref())
            .with(Field::MemberName, self.member_name.as_deref())
            .with(Field::IvodCommitteeCode, self.committee_code.as_deref())
            .with(Field::MeetingCodeData, self.meeting_code_data.as_deref())
            .with_date(Field::Date, self.date.as_deref())?
            .with(Field::VideoType, self.video_type)
            .with_list(Field::OutputFields, &self.output_fields);
        self.pagination.apply(query)
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetIvodRequest {
    /// IVOD 編號，必填，例: 156045
    pub ivod_id: String,
}

impl ApiRequest for GetIvodRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!("/ivods/{}", segment("ivod_id", &self.ivod_id)?))
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetMeetIvodsRequest {
    /// 會議編號，必填，例: 委員會-11-1-15-1
    pub meet_id: String,
    #[serde(flatten)]
    pub filters: ListIvodsRequest,
}

impl ApiRequest for GetMeetIvodsRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!("/meets/{}/ivods", segment("meet_id", &self.meet_id)?))
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        self.filters.query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_type_is_sent_verbatim() {
        let request = ListIvodsRequest {
            video_type: Some(VideoType::Clip),
            member_name: Some("王美惠".to_string()),
            ..Default::default()
        };
        let query = request.query().expect("valid request");
        assert_eq!(query.get("影片種類"), Some("Clip"));
        assert_eq!(query.get("委員名稱"), Some("王美惠"));
    }

    #[test]
    fn test_meet_ivods_deserializes_flat_arguments() {
        let request: GetMeetIvodsRequest = serde_json::from_value(serde_json::json!({
            "meet_id": "院會-11-2-3",
            "video_type": "Full",
            "limit": 5
        }))
        .expect("deserialize");
        assert_eq!(request.path(), Ok("/meets/院會-11-2-3/ivods".to_string()));
        let query = request.query().expect("valid request");
        assert_eq!(query.get("影片種類"), Some("Full"));
        assert_eq!(query.get("page"), Some("1"));
        assert_eq!(query.get("limit"), Some("5"));
    }

    #[test]
    fn test_committee_code_uses_ivod_key() {
        let request = ListIvodsRequest {
            committee_code: Some("15".to_string()),
            ..Default::default()
        };
        let query = request.query().expect("valid request");
        assert_eq!(query.get("委員會代碼"), Some("15"));
        assert!(!query.contains_key("會議資料.委員會代碼"));
    }
}
