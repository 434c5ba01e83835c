//! Transport behaviour against a stubbed API.

mod common;

use common::*;
use ly_mcp::api::client::ApiTransport;
use ly_mcp::api::fields::Field;
use ly_mcp::api::query::QueryParams;
use ly_mcp::error::ApiError;
use serde_json::json;
use std::time::Duration;
use wiremock::MockServer;

#[tokio::test]
async fn test_get_json_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/bills/{}", BILL_NO)))
        .respond_with(ResponseTemplate::new(200).set_body_json(bill_json()))
        .expect(1)
        .mount(&server)
        .await;

    let value = client(&server.uri())
        .get_json(&format!("/bills/{}", BILL_NO), &QueryParams::new())
        .await
        .expect("should succeed");

    assert_eq!(value["data"]["議案編號"], BILL_NO);
}

#[tokio::test]
async fn test_query_keys_are_localized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bills"))
        .and(query_param("屆", "11"))
        .and(query_param("議案類別", "法律案"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0, "bills": []})))
        .expect(1)
        .mount(&server)
        .await;

    let query = QueryParams::new()
        .with(Field::Term, Some(11))
        .with(Field::BillType, Some("法律案"))
        .paginate(1, 20)
        .expect("valid pagination");

    let value = client(&server.uri())
        .get_json("/bills", &query)
        .await
        .expect("should succeed");
    assert_eq!(value["total"], 0);
}

#[tokio::test]
async fn test_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bills/invalid_bill_number"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client(&server.uri())
        .get_json("/bills/invalid_bill_number", &QueryParams::new())
        .await;

    assert!(
        matches!(result, Err(ApiError::NotFound { ref endpoint }) if endpoint == "/bills/invalid_bill_number")
    );
}

#[tokio::test]
async fn test_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = client(&server.uri())
        .get_json("/stat", &QueryParams::new())
        .await;

    assert!(matches!(result, Err(ApiError::RateLimited { .. })));
}

#[tokio::test]
async fn test_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let result = client(&server.uri())
        .get_json("/stat", &QueryParams::new())
        .await;

    match result {
        Err(error @ ApiError::Server { status: 503, .. }) => {
            assert!(error.localized_message().contains("503"));
        }
        other => panic!("expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_other_status_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(418).set_body_string("teapot"))
        .mount(&server)
        .await;

    let result = client(&server.uri())
        .get_json("/stat", &QueryParams::new())
        .await;

    match result {
        Err(error @ ApiError::Http { status: 418, .. }) => {
            assert_eq!(error.localized_message(), "API 請求失敗：HTTP 418");
        }
        other => panic!("expected http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client(&server.uri())
        .get_json("/stat", &QueryParams::new())
        .await;

    assert!(matches!(result, Err(ApiError::Parse { .. })));
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let result = client(&server.uri())
        .get_json("/stat", &QueryParams::new())
        .await;

    match result {
        Err(error @ ApiError::Timeout { timeout_secs: 2, .. }) => {
            assert!(error.localized_message().starts_with("請求逾時"));
        }
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused() {
    let result = client("http://127.0.0.1:1")
        .get_json("/stat", &QueryParams::new())
        .await;

    match result {
        Err(error @ ApiError::Connection { .. }) => {
            assert!(error.localized_message().starts_with("連線錯誤"));
        }
        other => panic!("expected connection error, got {:?}", other),
    }
}
