//! Tests for the MCP tool host: dispatch, invocation, credential gating,
//! summarization, and response limiting

use cats_mcp::api::CatsClient;
use cats_mcp::config::{ApiConfig, LimitsConfig};
use cats_mcp::mcp::{McpRequest, McpServer, ToolCall, ToolContent};
use cats_mcp::registry;
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn selection(names: &[&str]) -> registry::ResolvedSelection {
    let requested: BTreeSet<String> = names.iter().map(|n| n.to_string()).collect();
    registry::resolve(&requested).unwrap()
}

fn host_against(upstream: &MockServer, api_key: Option<&str>, toolsets: &[&str]) -> McpServer {
    let config = ApiConfig {
        base_url: upstream.uri(),
        api_key: api_key.map(str::to_string),
        timeout_secs: 30,
    };
    let client = Arc::new(CatsClient::new(&config).unwrap());
    let mut host = McpServer::with_defaults();
    registry::register(selection(toolsets), &mut host, &client).unwrap();
    host
}

fn request(id: i64, method: &str, params: Value) -> McpRequest {
    McpRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(id)),
        method: method.to_string(),
        params: Some(params),
    }
}

fn result_text(content: &[ToolContent]) -> &str {
    match content.first() {
        Some(ToolContent::Text { text }) => text,
        None => panic!("result had no content"),
    }
}

#[tokio::test]
async fn initialize_and_tools_list_round_trip() {
    let upstream = MockServer::start().await;
    let host = host_against(&upstream, Some("k"), &["tasks"]);

    let response = host
        .handle_mcp_request(request(1, "initialize", json!({})))
        .await
        .expect("initialize must respond");
    let parsed: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(parsed["result"]["serverInfo"]["name"], "cats-mcp");
    assert!(parsed["result"]["capabilities"]["tools"].is_object());

    // The initialized notification gets no response
    let notification = McpRequest {
        jsonrpc: "2.0".to_string(),
        id: None,
        method: "notifications/initialized".to_string(),
        params: None,
    };
    assert!(host.handle_mcp_request(notification).await.is_none());

    let response = host
        .handle_mcp_request(request(2, "tools/list", json!({})))
        .await
        .unwrap();
    let parsed: Value = serde_json::from_str(&response).unwrap();
    let tools = parsed["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 5);
    assert_eq!(tools[0]["name"], "list_tasks");
    assert!(tools[0]["inputSchema"]["properties"]["per_page"].is_object());
}

#[tokio::test]
async fn unknown_tool_and_bad_arguments_use_protocol_error_codes() {
    let upstream = MockServer::start().await;
    let host = host_against(&upstream, Some("k"), &["tasks"]);

    let response = host
        .handle_mcp_request(request(3, "tools/call", json!({"name": "no_such_tool"})))
        .await
        .unwrap();
    let parsed: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(parsed["error"]["code"], -32000);

    // get_task requires task_id
    let response = host
        .handle_mcp_request(request(
            4,
            "tools/call",
            json!({"name": "get_task", "arguments": {}}),
        ))
        .await
        .unwrap();
    let parsed: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(parsed["error"]["code"], -32602);

    let response = host
        .handle_mcp_request(request(5, "bogus/method", json!({})))
        .await
        .unwrap();
    let parsed: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(parsed["error"]["code"], -32601);
}

#[tokio::test]
async fn credential_gating_is_per_call_not_per_registration() {
    let upstream = MockServer::start().await;

    // Registration succeeds without a credential and exposes operations
    let host = host_against(&upstream, None, &["candidates"]);
    assert!(host.tool_count() > 0);

    // Invoking one of them fails with the per-call missing-credential error
    let result = host
        .call_tool(&ToolCall::new("list_candidates", json!({})))
        .await
        .unwrap();
    assert!(result.is_error);
    assert_eq!(result.metadata.as_ref().unwrap()["kind"], "missing_credential");
    assert_eq!(upstream.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn upstream_failures_come_back_as_error_results_with_kinds() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such task"))
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&upstream)
        .await;

    let host = host_against(&upstream, Some("k"), &["tasks"]);

    let result = host
        .call_tool(&ToolCall::new("get_task", json!({"task_id": 1})))
        .await
        .unwrap();
    assert!(result.is_error);
    let meta = result.metadata.as_ref().unwrap();
    assert_eq!(meta["kind"], "not_found");
    assert_eq!(meta["status_code"], 404);
    assert!(result.error.as_ref().unwrap().contains("no such task"));

    let result = host
        .call_tool(&ToolCall::new("list_tasks", json!({})))
        .await
        .unwrap();
    assert_eq!(result.metadata.as_ref().unwrap()["kind"], "rate_limited");
}

#[tokio::test]
async fn tool_arguments_bind_onto_path_and_body() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/candidates/42/emails"))
        .and(body_json(json!({"email": "ada@b.test", "type": "personal"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 11})))
        .expect(1)
        .mount(&upstream)
        .await;

    let host = host_against(&upstream, Some("k"), &["candidates"]);
    let result = host
        .call_tool(&ToolCall::new(
            "create_candidate_email",
            json!({"candidate_id": 42, "email": "ada@b.test"}),
        ))
        .await
        .unwrap();

    assert!(!result.is_error);
    let body: Value = serde_json::from_str(result_text(&result.content)).unwrap();
    assert_eq!(body["id"], 11);
}

#[tokio::test]
async fn company_listings_are_summarized_unless_fields_is_all() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/companies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": {
                "companies": [
                    {"id": 1, "name": "Acme", "city": "SF", "internal_notes": "confidential"},
                ]
            },
            "total": 1,
            "page": 1,
            "per_page": 10,
        })))
        .mount(&upstream)
        .await;

    let host = host_against(&upstream, Some("k"), &["companies"]);

    let result = host
        .call_tool(&ToolCall::new("list_companies", json!({})))
        .await
        .unwrap();
    let body: Value = serde_json::from_str(result_text(&result.content)).unwrap();
    assert_eq!(body["companies"][0]["name"], "Acme");
    assert!(body["companies"][0].get("internal_notes").is_none());
    assert_eq!(body["count"], 1);

    let result = host
        .call_tool(&ToolCall::new("list_companies", json!({"fields": "all"})))
        .await
        .unwrap();
    let body: Value = serde_json::from_str(result_text(&result.content)).unwrap();
    assert_eq!(
        body["_embedded"]["companies"][0]["internal_notes"],
        "confidential"
    );
}

#[tokio::test]
async fn oversized_responses_are_replaced_with_a_limit_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"blob": "x".repeat(4096)})),
        )
        .mount(&upstream)
        .await;

    let config = ApiConfig {
        base_url: upstream.uri(),
        api_key: Some("k".to_string()),
        timeout_secs: 30,
    };
    let client = Arc::new(CatsClient::new(&config).unwrap());
    let mut host = McpServer::new(&LimitsConfig {
        max_response_bytes: 1024,
    });
    registry::register(selection(&["tasks"]), &mut host, &client).unwrap();

    let result = host
        .call_tool(&ToolCall::new("list_tasks", json!({})))
        .await
        .unwrap();
    assert!(result.is_error);
    assert!(result.error.as_ref().unwrap().contains("1024 byte limit"));
}
