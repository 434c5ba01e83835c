use crate::AppError;
use crate::api::client::ApiTransport;
use crate::api::models::{Bill, Envelope};
use crate::api::requests::ApiRequest;
use crate::api::requests::bills::{GetBillDocHtmlRequest, GetBillRequest, SearchBillsRequest};
use crate::core::cache::{CacheStats, ResponseCache};
use crate::core::normalize::{extract_records, is_empty_content};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Collection key used by the upstream bill listing.
const BILLS_COLLECTION: &str = "bills";

/// Outcome of a bill document lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum BillDocument {
    Content(Value),
    Empty { bill_no: String },
}

/// Legislative data service: validates requests, calls the transport and
/// applies the response cache to the memoized reads.
#[derive(Clone)]
pub struct LegislativeService {
    transport: Arc<dyn ApiTransport>,
    cache: Option<ResponseCache>,
}

impl LegislativeService {
    /// Create new LegislativeService; `None` disables caching
    pub fn new(transport: Arc<dyn ApiTransport>, cache: Option<ResponseCache>) -> Self {
        Self { transport, cache }
    }

    /// Cache statistics, `None` when caching is disabled
    pub fn cache_stats(&self) -> Option<HashMap<&'static str, CacheStats>> {
        self.cache.as_ref().map(ResponseCache::stats)
    }

    /// Runs one request and returns the upstream JSON untouched
    pub async fn fetch<R>(&self, request: &R) -> Result<Value, AppError>
    where
        R: ApiRequest + Sync,
    {
        let path = request.path()?;
        let query = request.query()?;
        let value = self.transport.get_json(&path, &query).await?;
        Ok(value)
    }

    /// Bill search summarized into an envelope of typed records
    pub async fn search_bills(&self, request: &SearchBillsRequest) -> Envelope {
        match self.search_bills_raw(request).await {
            Ok(payload) => {
                let bills: Vec<Bill> = extract_records(&payload, Some(BILLS_COLLECTION))
                    .iter()
                    .filter_map(Bill::from_record)
                    .collect();
                Envelope::listing(
                    &bills,
                    request.pagination.page,
                    request.pagination.limit,
                )
            }
            Err(e) => {
                tracing::warn!(error = %e, "search_bills failed");
                Envelope::failure(e.display_friendly())
            }
        }
    }

    async fn search_bills_raw(&self, request: &SearchBillsRequest) -> Result<Value, AppError> {
        let path = request.path()?;
        let query = request.query()?;
        let key = ResponseCache::key(&path, &query.to_query_string());

        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get_search(&key)) {
            tracing::debug!(key = %key, "search cache hit");
            return Ok(cached);
        }

        let value = self.transport.get_json(&path, &query).await?;
        if let Some(cache) = &self.cache {
            cache.cache_search(key, value.clone());
        }
        Ok(value)
    }

    /// Bill detail, served from the cache when possible
    pub async fn bill_detail(&self, request: &GetBillRequest) -> Result<Value, AppError> {
        let path = request.path()?;
        let key = ResponseCache::key(&path, "");

        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get_bill(&key)) {
            tracing::debug!(key = %key, "bill cache hit");
            return Ok(cached);
        }

        let value = self.fetch(request).await?;
        if let Some(cache) = &self.cache {
            cache.cache_bill(key, value.clone());
        }
        Ok(value)
    }

    /// Bill document; an empty payload is not an error
    pub async fn bill_document(
        &self,
        request: &GetBillDocHtmlRequest,
    ) -> Result<BillDocument, AppError> {
        let value = self.fetch(request).await?;
        if is_empty_content(&value) {
            return Ok(BillDocument::Empty {
                bill_no: request.bill_no.trim().to_string(),
            });
        }
        Ok(BillDocument::Content(value))
    }
}
