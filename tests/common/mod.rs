//! Shared helpers for integration tests that stub the open-data API.
//!
//! ```ignore
//! let server = MockServer::start().await;
//! Mock::given(method("GET"))
//!     .and(path("/bills/203110077970000"))
//!     .respond_with(ResponseTemplate::new(200).set_body_json(bill_json()))
//!     .mount(&server)
//!     .await;
//! let tools = tool_server(&server.uri());
//! ```

#![allow(dead_code)]

use ly_mcp::api::client::LyClient;
use ly_mcp::mcp::LyMcpServer;
use ly_mcp::mcp::output::result_text;
use rmcp::model::CallToolResult;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use wiremock::{MockServer, Request};

pub use wiremock::matchers::{method, path, query_param};
pub use wiremock::{Mock, ResponseTemplate};

pub const BILL_NO: &str = "203110077970000";

/// Client pointed at the stub with a short timeout
pub fn client(base_url: &str) -> LyClient {
    LyClient::with_timeout(base_url.to_string(), 2).expect("client creation failed")
}

/// Tool server without a response cache, so every call reaches the stub
pub fn tool_server(base_url: &str) -> LyMcpServer {
    LyMcpServer::with_transport(Arc::new(client(base_url)), None)
}

pub fn text(result: &CallToolResult) -> String {
    result_text(result)
}

pub fn bill_json() -> Value {
    json!({
        "data": {
            "議案編號": BILL_NO,
            "議案名稱": "中華民國刑法第一百八十五條之三條文修正草案",
            "議案類別": "法律案",
            "屆": 11,
            "會期": 2,
            "提案人": ["徐欣瑩", "林德福"],
            "議案狀態": "交付審查"
        }
    })
}

/// Decoded query pairs of every request the stub received, in order
pub async fn received_queries(server: &MockServer) -> Vec<HashMap<String, Vec<String>>> {
    let requests: Vec<Request> = server.received_requests().await.unwrap_or_default();
    requests
        .iter()
        .map(|request| {
            let mut pairs: HashMap<String, Vec<String>> = HashMap::new();
            for (key, value) in request.url.query_pairs() {
                pairs
                    .entry(key.into_owned())
                    .or_default()
                    .push(value.into_owned());
            }
            pairs
        })
        .collect()
}
