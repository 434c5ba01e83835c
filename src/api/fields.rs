//! Translation table between logical parameter names and the upstream
//! query keys.
//!
//! The Legislative Yuan API filters on localized field names such as `屆`
//! or `議案流程.狀態`. Tools expose snake_case names instead; every query
//! key sent upstream goes through [`Field::external_name`].

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Term,
    Session,
    BillFlowStatus,
    BillType,
    Proposer,
    Cosigner,
    LawNumber,
    BillStatus,
    MeetingCode,
    ProposalSource,
    BillNumber,
    ProposalNumber,
    ReferenceNumber,
    ArticleNumber,
    ProposalDate,
    MeetingType,
    Date,
    CommitteeType,
    CommitteeId,
    Member,
    CommitteeCode,
    MeetId,
    RelatedBillNumber,
    RelatedLawNumber,
    GazetteId,
    Volume,
    MeetingDate,
    GazetteAgendaId,
    InterpellationMember,
    MemberName,
    IvodCommitteeCode,
    MeetingCodeData,
    VideoType,
    LawCategory,
    LawStatus,
    LawName,
    LawAuthority,
    Party,
    District,
    LegislatorName,
    OutputFields,
    Page,
    Limit,
}

impl Field {
    pub const ALL: [Field; 43] = [
        Field::Term,
        Field::Session,
        Field::BillFlowStatus,
        Field::BillType,
        Field::Proposer,
        Field::Cosigner,
        Field::LawNumber,
        Field::BillStatus,
        Field::MeetingCode,
        Field::ProposalSource,
        Field::BillNumber,
        Field::ProposalNumber,
        Field::ReferenceNumber,
        Field::ArticleNumber,
        Field::ProposalDate,
        Field::MeetingType,
        Field::Date,
        Field::CommitteeType,
        Field::CommitteeId,
        Field::Member,
        Field::CommitteeCode,
        Field::MeetId,
        Field::RelatedBillNumber,
        Field::RelatedLawNumber,
        Field::GazetteId,
        Field::Volume,
        Field::MeetingDate,
        Field::GazetteAgendaId,
        Field::InterpellationMember,
        Field::MemberName,
        Field::IvodCommitteeCode,
        Field::MeetingCodeData,
        Field::VideoType,
        Field::LawCategory,
        Field::LawStatus,
        Field::LawName,
        Field::LawAuthority,
        Field::Party,
        Field::District,
        Field::LegislatorName,
        Field::OutputFields,
        Field::Page,
        Field::Limit,
    ];

    /// Query key expected by the upstream API.
    pub fn external_name(self) -> &'static str {
        match self {
            Field::Term => "屆",
            Field::Session => "會期",
            Field::BillFlowStatus => "議案流程.狀態",
            Field::BillType => "議案類別",
            Field::Proposer => "提案人",
            Field::Cosigner => "連署人",
            Field::LawNumber => "法律編號",
            Field::BillStatus => "議案狀態",
            Field::MeetingCode => "會議代碼",
            Field::ProposalSource => "提案來源",
            Field::BillNumber => "議案編號",
            Field::ProposalNumber => "提案編號",
            Field::ReferenceNumber => "字號",
            Field::ArticleNumber => "法條編號",
            Field::ProposalDate => "提案日期",
            Field::MeetingType => "會議種類",
            Field::Date => "日期",
            Field::CommitteeType => "委員會類別",
            Field::CommitteeId => "委員會代號",
            Field::Member => "會議資料.出席委員",
            Field::CommitteeCode => "會議資料.委員會代碼",
            Field::MeetId => "會議資料.會議編號",
            Field::RelatedBillNumber => "議事網資料.關係文書.議案.議案編號",
            Field::RelatedLawNumber => "議事網資料.關係文書.議案.法律編號",
            Field::GazetteId => "公報編號",
            Field::Volume => "卷",
            Field::MeetingDate => "會議日期",
            Field::GazetteAgendaId => "公報議程編號",
            Field::InterpellationMember => "質詢委員",
            Field::MemberName => "委員名稱",
            Field::IvodCommitteeCode => "委員會代碼",
            Field::MeetingCodeData => "會議資料.會議代碼",
            Field::VideoType => "影片種類",
            Field::LawCategory => "類別",
            Field::LawStatus => "法律狀態",
            Field::LawName => "名稱",
            Field::LawAuthority => "主管機關",
            Field::Party => "黨籍",
            Field::District => "選區名稱",
            Field::LegislatorName => "委員姓名",
            Field::OutputFields => "output_fields",
            Field::Page => "page",
            Field::Limit => "limit",
        }
    }

    /// Logical snake_case name, as exposed in tool parameters.
    pub fn logical_name(self) -> &'static str {
        match self {
            Field::Term => "term",
            Field::Session => "session",
            Field::BillFlowStatus => "bill_flow_status",
            Field::BillType => "bill_type",
            Field::Proposer => "proposer",
            Field::Cosigner => "cosigner",
            Field::LawNumber => "law_number",
            Field::BillStatus => "bill_status",
            Field::MeetingCode => "meeting_code",
            Field::ProposalSource => "proposal_source",
            Field::BillNumber => "bill_number",
            Field::ProposalNumber => "proposal_number",
            Field::ReferenceNumber => "reference_number",
            Field::ArticleNumber => "article_number",
            Field::ProposalDate => "proposal_date",
            Field::MeetingType => "meeting_type",
            Field::Date => "date",
            Field::CommitteeType => "committee_type",
            Field::CommitteeId => "comt_cd",
            Field::Member => "member",
            Field::CommitteeCode => "committee_code",
            Field::MeetId => "meet_id",
            Field::RelatedBillNumber => "bill_no",
            Field::RelatedLawNumber => "law_number",
            Field::GazetteId => "gazette_id",
            Field::Volume => "volume",
            Field::MeetingDate => "meeting_date",
            Field::GazetteAgendaId => "gazette_agenda_id",
            Field::InterpellationMember => "interpellation_member",
            Field::MemberName => "member_name",
            Field::IvodCommitteeCode => "committee_code",
            Field::MeetingCodeData => "meeting_code_data",
            Field::VideoType => "video_type",
            Field::LawCategory => "law_category",
            Field::LawStatus => "law_status",
            Field::LawName => "law_name",
            Field::LawAuthority => "law_authority",
            Field::Party => "party",
            Field::District => "district",
            Field::LegislatorName => "name",
            Field::OutputFields => "output_fields",
            Field::Page => "page",
            Field::Limit => "limit",
        }
    }

    /// Reverse lookup of an upstream query key.
    pub fn from_external(name: &str) -> Option<Field> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.external_name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.logical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_external_names_are_injective() {
        let names: HashSet<&str> = Field::ALL.iter().map(|f| f.external_name()).collect();
        assert_eq!(names.len(), Field::ALL.len());
    }

    #[test]
    fn test_all_lists_each_variant_once() {
        let unique: HashSet<Field> = Field::ALL.iter().copied().collect();
        assert_eq!(unique.len(), Field::ALL.len());
    }

    #[test]
    fn test_external_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_external(field.external_name()), Some(field));
        }
    }

    #[test]
    fn test_from_external_unknown_key() {
        assert_eq!(Field::from_external("不存在的欄位"), None);
        assert_eq!(Field::from_external(""), None);
    }

    #[test]
    fn test_known_translations() {
        assert_eq!(Field::Term.external_name(), "屆");
        assert_eq!(Field::BillFlowStatus.external_name(), "議案流程.狀態");
        assert_eq!(Field::Page.external_name(), "page");
        assert_eq!(Field::CommitteeId.to_string(), "comt_cd");
    }
}
