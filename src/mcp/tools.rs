//! Tool catalog. Every tool is a read-only lookup against the open-data API.

use super::output;
use super::server::LyMcpServer;
use crate::api::requests::ApiRequest;
use crate::api::requests::bills::{
    GetBillDocHtmlRequest, GetBillMeetsRequest, GetBillRelatedBillsRequest, GetBillRequest,
    ListBillsRequest, SearchBillsRequest,
};
use crate::api::requests::committees::{
    GetCommitteeMeetsRequest, GetCommitteeRequest, ListCommitteesRequest,
};
use crate::api::requests::gazettes::{
    GetGazetteAgendaRequest, GetGazetteAgendasRequest, GetGazetteRequest,
    ListGazetteAgendasRequest, ListGazettesRequest,
};
use crate::api::requests::interpellations::{GetInterpellationRequest, ListInterpellationsRequest};
use crate::api::requests::ivods::{GetIvodRequest, GetMeetIvodsRequest, ListIvodsRequest};
use crate::api::requests::laws::{GetLawRequest, ListLawsRequest};
use crate::api::requests::legislators::{
    GetLegislatorInterpellationsRequest, GetLegislatorRequest, ListLegislatorsRequest,
};
use crate::api::requests::meets::{GetMeetRequest, ListMeetsRequest};
use crate::api::requests::stat::StatRequest;
use crate::core::services::BillDocument;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content};
use rmcp::{ErrorData as McpError, tool, tool_router};

impl LyMcpServer {
    pub(super) fn build_tool_router() -> ToolRouter<Self> {
        Self::tool_router()
    }

    async fn run<R>(&self, tool: &str, request: &R) -> Result<CallToolResult, McpError>
    where
        R: ApiRequest + Sync,
    {
        tracing::debug!(tool, "tool call");
        Ok(output::from_result(tool, self.service.fetch(request).await))
    }
}

#[tool_router]
impl LyMcpServer {
    #[tool(
        description = "取得立法院資料統計：議案、委員、公報、會議、影音等資料的筆數與最後更新時間",
        annotations(title = "資料統計", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_stat(&self) -> Result<CallToolResult, McpError> {
        self.run("get_stat", &StatRequest).await
    }

    // Bills

    #[tool(
        description = "列出議案，可依屆期、會期、議案類別、提案人、議案狀態等條件篩選",
        annotations(title = "議案列表", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn list_bills(
        &self,
        Parameters(request): Parameters<ListBillsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("list_bills", &request).await
    }

    #[tool(
        description = "搜尋議案並回傳整理後的結果，包含總筆數、頁數與每頁筆數",
        annotations(title = "搜尋議案", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn search_bills(
        &self,
        Parameters(request): Parameters<SearchBillsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "search_bills", "tool call");
        let envelope = self.service.search_bills(&request).await;
        Ok(output::envelope(&envelope))
    }

    #[tool(
        description = "依議案編號取得議案詳細資料，例: 203110077970000",
        annotations(title = "議案詳細資料", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_bill(
        &self,
        Parameters(request): Parameters<GetBillRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_bill", "tool call");
        let result = self.service.bill_detail(&request).await;
        Ok(output::from_result("get_bill", result))
    }

    #[tool(
        description = "取得與指定議案相關的其他議案",
        annotations(title = "相關議案", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_bill_related_bills(
        &self,
        Parameters(request): Parameters<GetBillRelatedBillsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_bill_related_bills", &request).await
    }

    #[tool(
        description = "取得審議指定議案的會議紀錄",
        annotations(title = "議案相關會議", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_bill_meets(
        &self,
        Parameters(request): Parameters<GetBillMeetsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_bill_meets", &request).await
    }

    #[tool(
        description = "取得議案的文件內容 (HTML)；尚無文件時會說明可能原因",
        annotations(title = "議案文件", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_bill_doc_html(
        &self,
        Parameters(request): Parameters<GetBillDocHtmlRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_bill_doc_html", "tool call");
        match self.service.bill_document(&request).await {
            Ok(BillDocument::Content(value)) => Ok(output::success(&value)),
            Ok(BillDocument::Empty { bill_no }) => Ok(CallToolResult::success(vec![
                Content::text(output::empty_document_text(&bill_no)),
            ])),
            Err(e) => Ok(output::failure("get_bill_doc_html", &e)),
        }
    }

    // Committees

    #[tool(
        description = "列出立法院委員會，可依委員會類別篩選",
        annotations(title = "委員會列表", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn list_committees(
        &self,
        Parameters(request): Parameters<ListCommitteesRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("list_committees", &request).await
    }

    #[tool(
        description = "依委員會代號取得委員會詳細資料，例: 15",
        annotations(title = "委員會詳細資料", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_committee(
        &self,
        Parameters(request): Parameters<GetCommitteeRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_committee", &request).await
    }

    #[tool(
        description = "取得指定委員會的會議，可依屆期、會期、日期與相關議案篩選",
        annotations(title = "委員會會議", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_committee_meets(
        &self,
        Parameters(request): Parameters<GetCommitteeMeetsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_committee_meets", &request).await
    }

    // Gazettes

    #[tool(
        description = "列出立法院公報，可依公報編號、卷篩選",
        annotations(title = "公報列表", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn list_gazettes(
        &self,
        Parameters(request): Parameters<ListGazettesRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("list_gazettes", &request).await
    }

    #[tool(
        description = "依公報編號取得公報詳細資料",
        annotations(title = "公報詳細資料", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_gazette(
        &self,
        Parameters(request): Parameters<GetGazetteRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_gazette", &request).await
    }

    #[tool(
        description = "取得指定公報的所有目錄",
        annotations(title = "公報目錄", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_gazette_agendas(
        &self,
        Parameters(request): Parameters<GetGazetteAgendasRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_gazette_agendas", &request).await
    }

    #[tool(
        description = "列出公報目錄，可依公報編號、屆期、會議日期等條件篩選",
        annotations(title = "公報目錄列表", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn list_gazette_agendas(
        &self,
        Parameters(request): Parameters<ListGazetteAgendasRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("list_gazette_agendas", &request).await
    }

    #[tool(
        description = "依公報目錄編號取得目錄詳細資料",
        annotations(title = "公報目錄詳細資料", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_gazette_agenda(
        &self,
        Parameters(request): Parameters<GetGazetteAgendaRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_gazette_agenda", &request).await
    }

    // Interpellations

    #[tool(
        description = "列出質詢紀錄，可依質詢委員、屆期、會期、會議代碼篩選",
        annotations(title = "質詢列表", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn list_interpellations(
        &self,
        Parameters(request): Parameters<ListInterpellationsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("list_interpellations", &request).await
    }

    #[tool(
        description = "依質詢編號取得質詢詳細資料",
        annotations(title = "質詢詳細資料", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_interpellation(
        &self,
        Parameters(request): Parameters<GetInterpellationRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_interpellation", &request).await
    }

    #[tool(
        description = "取得指定委員在某一屆的質詢紀錄",
        annotations(title = "委員質詢紀錄", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_legislator_interpellations(
        &self,
        Parameters(request): Parameters<GetLegislatorInterpellationsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_legislator_interpellations", &request).await
    }

    // Legislators

    #[tool(
        description = "列出立法委員，可依屆期、黨籍、選區、姓名篩選",
        annotations(title = "委員列表", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn list_legislators(
        &self,
        Parameters(request): Parameters<ListLegislatorsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("list_legislators", &request).await
    }

    #[tool(
        description = "依屆期與姓名取得立法委員詳細資料",
        annotations(title = "委員詳細資料", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_legislator(
        &self,
        Parameters(request): Parameters<GetLegislatorRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_legislator", &request).await
    }

    // Laws

    #[tool(
        description = "列出法律，可依類別、法律狀態、法律名稱、主管機關篩選",
        annotations(title = "法律列表", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn list_laws(
        &self,
        Parameters(request): Parameters<ListLawsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("list_laws", &request).await
    }

    #[tool(
        description = "依法律編號取得法律詳細資料，例: 09200015",
        annotations(title = "法律詳細資料", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_law(
        &self,
        Parameters(request): Parameters<GetLawRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_law", &request).await
    }

    // IVOD videos

    #[tool(
        description = "列出議事影音 (IVOD)，可依屆期、會期、委員、日期、影片種類篩選",
        annotations(title = "影音列表", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn list_ivods(
        &self,
        Parameters(request): Parameters<ListIvodsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("list_ivods", &request).await
    }

    #[tool(
        description = "依影音編號取得議事影音詳細資料",
        annotations(title = "影音詳細資料", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_ivod(
        &self,
        Parameters(request): Parameters<GetIvodRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_ivod", &request).await
    }

    #[tool(
        description = "取得指定會議的議事影音",
        annotations(title = "會議影音", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_meet_ivods(
        &self,
        Parameters(request): Parameters<GetMeetIvodsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_meet_ivods", &request).await
    }

    // Meetings

    #[tool(
        description = "列出會議，可依屆期、會期、會議種類、日期、委員會代碼、會議代碼篩選",
        annotations(title = "會議列表", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn list_meets(
        &self,
        Parameters(request): Parameters<ListMeetsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("list_meets", &request).await
    }

    #[tool(
        description = "依會議代碼取得會議詳細資料",
        annotations(title = "會議詳細資料", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_meet(
        &self,
        Parameters(request): Parameters<GetMeetRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("get_meet", &request).await
    }
}
