use crate::api::query::QueryParams;
use crate::error::ApiError;
use crate::utils::error_helpers::{convert_json_error, convert_request_error};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://ly.govapi.tw/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("ly-mcp/", env!("CARGO_PKG_VERSION"));

/// One GET round trip against the upstream API.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get_json(&self, path: &str, query: &QueryParams) -> Result<Value, ApiError>;
}

#[derive(Debug, Clone)]
pub struct LyClient {
    client: Client,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl LyClient {
    // Create client with the default timeout
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: String, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Http {
                status: 0,
                endpoint: "client_init".to_string(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(LyClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    /// Base URL joined with `path`, each path segment percent-encoded.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, ApiError> {
        let invalid = |message: String| ApiError::Http {
            status: 0,
            endpoint: path.to_string(),
            message,
        };
        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid(format!("Base URL cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
    ) -> Result<RequestBuilder, ApiError> {
        let request = self
            .client
            .request(method, self.endpoint_url(path)?)
            .header("Accept", "application/json");

        if query.is_empty() {
            Ok(request)
        } else {
            Ok(request.query(query.pairs()))
        }
    }

    pub async fn handle_response(&self, response: Response, endpoint: &str) -> Result<Value, ApiError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<Value>()
                .await
                .map_err(|e| convert_json_error(e, endpoint, self.timeout_secs));
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match status.as_u16() {
            404 => Err(ApiError::NotFound {
                endpoint: endpoint.to_string(),
            }),
            429 => Err(ApiError::RateLimited {
                endpoint: endpoint.to_string(),
            }),
            code @ 500..=599 => Err(ApiError::Server {
                status: code,
                endpoint: endpoint.to_string(),
            }),
            code => Err(ApiError::Http {
                status: code,
                endpoint: endpoint.to_string(),
                message: error_text,
            }),
        }
    }
}

#[async_trait]
impl ApiTransport for LyClient {
    async fn get_json(&self, path: &str, query: &QueryParams) -> Result<Value, ApiError> {
        tracing::debug!(endpoint = path, query = %query.to_query_string(), "GET");

        let response = self
            .build_request(Method::GET, path, query)?
            .send()
            .await
            .map_err(|e| convert_request_error(e, path, self.timeout_secs))?;

        self.handle_response(response, path).await
    }
}
