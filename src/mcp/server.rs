use crate::AppError;
use crate::api::client::{ApiTransport, LyClient};
use crate::core::cache::ResponseCache;
use crate::core::services::LegislativeService;
use crate::error::ServiceError;
use crate::storage::config::Config;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, JsonObject, ServerCapabilities,
    ServerInfo, Tool,
};
use rmcp::{ServerHandler, ServiceExt, tool_handler};
use std::sync::Arc;
use std::time::Duration;

const INSTRUCTIONS: &str = "立法院開放資料查詢工具。可查詢議案、委員會、公報、質詢、立法委員、法律、議事影音與會議。\
列表類工具支援 page 與 limit 分頁，並可用 output_fields 限制回傳欄位；結果過長時會被截斷。";

/// Buffer for the in-process transport used by [`call_tool_once`].
const DUPLEX_BUFFER: usize = 64 * 1024;

#[derive(Clone)]
pub struct LyMcpServer {
    pub(super) service: LegislativeService,
    tool_router: ToolRouter<Self>,
}

impl LyMcpServer {
    pub fn new(service: LegislativeService) -> Self {
        Self {
            service,
            tool_router: Self::build_tool_router(),
        }
    }

    /// Server over any transport; `None` disables the response cache
    pub fn with_transport(transport: Arc<dyn ApiTransport>, cache: Option<ResponseCache>) -> Self {
        Self::new(LegislativeService::new(transport, cache))
    }

    /// Server talking to the configured upstream API
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = LyClient::with_timeout(config.api.base_url.clone(), config.api.timeout_seconds)?;
        let cache = config.cache.enabled.then(|| {
            ResponseCache::new(
                Duration::from_secs(config.cache.ttl_seconds),
                config.cache.capacity,
            )
        });
        tracing::debug!(
            base_url = %client.base_url,
            timeout_secs = client.timeout_secs,
            cache = config.cache.enabled,
            "server configured"
        );
        Ok(Self::with_transport(Arc::new(client), cache))
    }

    /// Registered tools, sorted by name
    pub fn tools(&self) -> Vec<Tool> {
        let mut tools = self.tool_router.list_all();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tool_router.list_all().iter().any(|t| t.name == name)
    }
}

#[tool_handler]
impl ServerHandler for LyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

fn mcp_error(e: impl std::fmt::Display) -> AppError {
    ServiceError::Mcp {
        message: e.to_string(),
    }
    .into()
}

/// Serve the tool catalog over stdin/stdout until the client disconnects
pub async fn serve_stdio(server: LyMcpServer) -> Result<(), AppError> {
    tracing::info!("MCP server listening on stdio");
    let service = server.service.clone();
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(mcp_error)?;
    let reason = running.waiting().await.map_err(mcp_error)?;
    tracing::info!(?reason, "MCP server stopped");
    if let Some(stats) = service.cache_stats() {
        tracing::debug!(?stats, "response cache");
    }
    Ok(())
}

/// Run a single tool call through an in-process client session
pub async fn call_tool_once(
    server: LyMcpServer,
    name: &str,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, AppError> {
    let (client_io, server_io) = tokio::io::duplex(DUPLEX_BUFFER);

    let server_task = tokio::spawn(async move {
        match server.serve(server_io).await {
            Ok(running) => {
                if let Err(e) = running.waiting().await {
                    tracing::debug!(error = %e, "in-process server task ended");
                }
            }
            Err(e) => tracing::error!(error = %e, "in-process server failed to start"),
        }
    });

    let client = ().serve(client_io).await.map_err(mcp_error)?;
    let result = client
        .call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments,
        })
        .await
        .map_err(mcp_error);

    if let Err(e) = client.cancel().await {
        tracing::debug!(error = %e, "client shutdown");
    }
    server_task.abort();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_every_tool() {
        let server = LyMcpServer::from_config(&Config::default()).expect("server");
        let names: Vec<String> = server.tools().iter().map(|t| t.name.to_string()).collect();
        assert_eq!(names.len(), 27);
        for expected in [
            "get_stat",
            "list_bills",
            "search_bills",
            "get_bill",
            "get_bill_doc_html",
            "get_committee_meets",
            "get_gazette_agendas",
            "get_legislator_interpellations",
            "get_meet_ivods",
            "get_meet",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_every_tool_has_description() {
        let server = LyMcpServer::from_config(&Config::default()).expect("server");
        assert!(server.tools().iter().all(|t| t.description.is_some()));
        assert!(server.has_tool("get_bill"));
        assert!(!server.has_tool("delete_bill"));
    }

    #[test]
    fn test_listing_descriptions_only_name_real_filters() {
        let server = LyMcpServer::from_config(&Config::default()).expect("server");
        let description = |name: &str| {
            server
                .tools()
                .into_iter()
                .find(|t| t.name == name)
                .and_then(|t| t.description)
                .map(|d| d.to_string())
                .unwrap_or_default()
        };
        assert!(!description("list_gazettes").contains("冊別"));
        assert!(!description("list_laws").contains("母法編號"));
        assert!(!description("list_meets").contains("委員、"));
        assert!(description("list_laws").contains("主管機關"));
    }

    #[test]
    fn test_server_info() {
        let server = LyMcpServer::from_config(&Config::default()).expect("server");
        let info = server.get_info();
        assert_eq!(info.server_info.name, "ly-mcp");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }
}
