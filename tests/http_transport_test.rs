//! Tests for the HTTP transport (JSON-RPC over POST /mcp, health endpoint)

use actix_web::{test, web, App};
use cats_mcp::api::CatsClient;
use cats_mcp::config::{ApiConfig, Config, LimitsConfig, ServerConfig, Transport};
use cats_mcp::mcp::McpServer;
use cats_mcp::registry;
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::sync::Arc;

fn test_config() -> Config {
    Config {
        api: ApiConfig {
            base_url: "https://api.catsone.test/v3".to_string(),
            api_key: None,
            timeout_secs: 30,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        limits: LimitsConfig::default(),
        transport: Transport::Http,
        toolsets: None,
    }
}

fn test_host(config: &Config) -> Arc<McpServer> {
    let client = Arc::new(CatsClient::new(&config.api).unwrap());
    let mut host = McpServer::new(&config.limits);
    let requested: BTreeSet<String> = ["tasks".to_string()].into_iter().collect();
    let selection = registry::resolve(&requested).unwrap();
    registry::register(selection, &mut host, &client).unwrap();
    Arc::new(host)
}

#[actix_rt::test]
async fn health_endpoint_reports_configuration_state() {
    let config = test_config();
    let host = test_host(&config);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(host))
            .app_data(web::Data::new(config))
            .configure(cats_mcp::web::configure),
    )
    .await;

    let request = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["api_configured"], false);
    assert_eq!(body["api_base_url"], "https://api.catsone.test/v3");
}

#[actix_rt::test]
async fn mcp_endpoint_serves_tools_list() {
    let config = test_config();
    let host = test_host(&config);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(host))
            .app_data(web::Data::new(config))
            .configure(cats_mcp::web::configure),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/mcp")
        .set_json(json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["result"]["tools"].as_array().unwrap().len(), 5);
}

#[actix_rt::test]
async fn malformed_json_gets_a_parse_error() {
    let config = test_config();
    let host = test_host(&config);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(host))
            .app_data(web::Data::new(config))
            .configure(cats_mcp::web::configure),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/mcp")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["error"]["code"], -32700);
}
