use super::{ApiRequest, Pagination, segment};
use crate::api::fields::Field;
use crate::api::query::QueryParams;
use crate::error::ValidationError;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListBillsRequest {
    /// 屆期，例: 11
    pub term: Option<u32>,
    /// 會期，例: 2
    pub session: Option<u32>,
    /// 議案流程狀態，例: 三讀
    pub bill_flow_status: Option<String>,
    /// 議案類別，例: 法律案
    pub bill_type: Option<String>,
    /// 提案人，例: 徐欣瑩
    pub proposer: Option<String>,
    /// 連署人，例: 林德福
    pub cosigner: Option<String>,
    /// 法律編號，例: 01254
    pub law_number: Option<String>,
    /// 議案狀態，例: 交付審查
    pub bill_status: Option<String>,
    /// 會議代碼
    pub meeting_code: Option<String>,
    /// 提案來源，例: 委員提案
    pub proposal_source: Option<String>,
    /// 議案編號，例: 203110077970000
    pub bill_number: Option<String>,
    /// 提案編號
    pub proposal_number: Option<String>,
    /// 字號
    pub reference_number: Option<String>,
    /// 法條編號
    pub article_number: Option<String>,
    /// 提案日期，格式 YYYY-MM-DD，須為完整日期 (只給年或年月會被拒絕)
    pub proposal_date: Option<String>,
    /// 只回傳指定欄位
    #[serde(default)]
    pub output_fields: Vec<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApiRequest for ListBillsRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok("/bills".to_string())
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        let query = QueryParams::new()
            .with(Field::Term, self.term)
            .with(Field::Session, self.session)
            .with(Field::BillFlowStatus, self.bill_flow_status.as_deref())
            .with(Field::BillType, self.bill_type.as_deref())
            .with(Field::Proposer, self.proposer.as_deref())
            .with(Field::Cosigner, self.cosigner.as_deref())
            .with(Field::LawNumber, self.law_number.as_deref())
            .with(Field::BillStatus, self.bill_status.as_deref())
            .with(Field::MeetingCode, self.meeting_code.as_deref())
            .with(Field::ProposalSource, self.proposal_source.as_deref())
            .with(Field::BillNumber, self.bill_number.as_deref())
            .with(Field::ProposalNumber, self.proposal_number.as_deref())
            .with(Field::ReferenceNumber, self.reference_number.as_deref())
            .with(Field::ArticleNumber, self.article_number.as_deref())
            .with_date(Field::ProposalDate, self.proposal_date.as_deref())?
            .with_list(Field::OutputFields, &self.output_fields);
        self.pagination.apply(query)
    }
}

/// Filters for the summarized bill search.
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct SearchBillsRequest {
    /// 屆期，例: 11
    pub term: Option<u32>,
    /// 會期，例: 2
    pub session: Option<u32>,
    /// 議案類別，例: 法律案、預算案
    pub bill_type: Option<String>,
    /// 提案人姓名
    pub proposer: Option<String>,
    /// 連署人姓名
    pub cosigner: Option<String>,
    /// 議案狀態，例: 交付審查、三讀、排入院會
    pub bill_status: Option<String>,
    /// 提案來源，例: 委員提案、政府提案
    pub proposal_source: Option<String>,
    /// 特定議案編號
    pub bill_no: Option<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApiRequest for SearchBillsRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok("/bills".to_string())
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        let query = QueryParams::new()
            .with(Field::Term, self.term)
            .with(Field::Session, self.session)
            .with(Field::BillType, self.bill_type.as_deref())
            .with(Field::Proposer, self.proposer.as_deref())
            .with(Field::Cosigner, self.cosigner.as_deref())
            .with(Field::BillStatus, self.bill_status.as_deref())
            .with(Field::ProposalSource, self.proposal_source.as_deref())
            .with(Field::BillNumber, self.bill_no.as_deref());
        self.pagination.apply(query)
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetBillRequest {
    /// 議案編號，必填，例: 203110077970000
    pub bill_no: String,
}

impl ApiRequest for GetBillRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!("/bills/{}", segment("bill_no", &self.bill_no)?))
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetBillRelatedBillsRequest {
    /// 議案編號，必填，例: 203110077970000
    pub bill_no: String,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApiRequest for GetBillRelatedBillsRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!(
            "/bills/{}/related_bills",
            segment("bill_no", &self.bill_no)?
        ))
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        self.pagination.apply(QueryParams::new())
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetBillMeetsRequest {
    /// 議案編號，必填，例: 203110077970000
    pub bill_no: String,
    /// 屆期
    pub term: Option<u32>,
    /// 會期
    pub session: Option<u32>,
    /// 會議種類，例: 院會、委員會
    pub meeting_type: Option<String>,
    /// 會議日期，格式 YYYY-MM-DD，須為完整日期 (只給年或年月會被拒絕)
    pub date: Option<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApiRequest for GetBillMeetsRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!("/bills/{}/meets", segment("bill_no", &self.bill_no)?))
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        let query = QueryParams::new()
            .with(Field::Term, self.term)
            .with(Field::Session, self.session)
            .with(Field::MeetingType, self.meeting_type.as_deref())
            .with_date(Field::Date, self.date.as_deref())?;
        self.pagination.apply(query)
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetBillDocHtmlRequest {
    /// 議案編號，必填，例: 203110077970000
    pub bill_no: String,
}

impl ApiRequest for GetBillDocHtmlRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!(
            "/bills/{}/doc_html",
            segment("bill_no", &self.bill_no)?
        ))
    }
}
