//! Command-line behaviour of the `ly-mcp` binary.

mod common;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;
use wiremock::MockServer;

fn ly_mcp() -> Command {
    let mut cmd = Command::cargo_bin("ly-mcp").expect("binary built");
    cmd.env_remove("LY_API_BASE_URL")
        .env_remove("LY_API_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    ly_mcp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("tools"))
        .stdout(predicate::str::contains("call"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_tools_lists_catalog() {
    let assert = ly_mcp().arg("tools").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.lines().count(), 27);
    assert!(stdout.contains("get_bill_doc_html"));
    assert!(stdout.contains("search_bills"));
}

#[test]
fn test_config_set_show_and_path() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_string_lossy().to_string();

    ly_mcp()
        .args(["--config-dir", &dir, "config", "set", "cache.ttl_seconds", "60"])
        .assert()
        .success();

    ly_mcp()
        .args(["--config-dir", &dir, "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cache.ttl_seconds = 60"))
        .stdout(predicate::str::contains("api.base_url = https://ly.govapi.tw/v2"));

    ly_mcp()
        .args(["--config-dir", &dir, "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_set_unknown_key_fails() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_string_lossy().to_string();

    ly_mcp()
        .args(["--config-dir", &dir, "config", "set", "profile.url", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Hint:"));
}

#[test]
fn test_call_with_blank_identifier_fails() {
    ly_mcp()
        .args(["call", "get_bill", "--args", r#"{"bill_no": " "}"#])
        .assert()
        .failure()
        .stdout(predicate::str::contains("❌"))
        .stdout(predicate::str::contains("bill_no"));
}

#[test]
fn test_call_rejects_non_object_args() {
    ly_mcp()
        .args(["call", "get_stat", "--args", "[1]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON object"));
}

#[test]
fn test_call_unknown_tool() {
    ly_mcp()
        .args(["call", "delete_bill"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool: delete_bill"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_call_against_stubbed_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/bills/{}", BILL_NO)))
        .respond_with(ResponseTemplate::new(200).set_body_json(bill_json()))
        .mount(&server)
        .await;

    let uri = server.uri();
    let args = json!({"bill_no": BILL_NO}).to_string();
    let output = tokio::task::spawn_blocking(move || {
        ly_mcp()
            .args(["call", "get_bill", "--base-url", &uri, "--args", &args])
            .output()
            .expect("run binary")
    })
    .await
    .expect("join");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("✅ 查詢成功"));
    assert!(stdout.contains(BILL_NO));
}
