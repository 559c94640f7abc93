//! Tests for toolset selection resolution and registration dispatch

use cats_mcp::api::CatsClient;
use cats_mcp::config::ApiConfig;
use cats_mcp::error::ServerError;
use cats_mcp::mcp::McpServer;
use cats_mcp::registry::{self, catalog, DEFAULT_TOOLSETS};
use std::collections::BTreeSet;
use std::sync::Arc;

fn requested(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn test_client() -> Arc<CatsClient> {
    let config = ApiConfig {
        base_url: "https://api.catsone.test/v3".to_string(),
        api_key: Some("test-key".to_string()),
        timeout_secs: 30,
    };
    Arc::new(CatsClient::new(&config).expect("client should build"))
}

#[test]
fn resolution_is_idempotent() {
    let names = requested(&["candidates", "jobs"]);
    let first = registry::resolve(&names).unwrap();
    let second = registry::resolve(&names).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn sentinel_expands_to_full_catalog_and_wins_over_explicit_names() {
    let with_extra = registry::resolve(&requested(&["all", "candidates"])).unwrap();
    let bare = registry::resolve(&requested(&["all"])).unwrap();
    assert_eq!(with_extra, bare);
    assert_eq!(bare.len(), catalog().len());
}

#[test]
fn unknown_name_fails_fast_and_registers_nothing() {
    let host = McpServer::with_defaults();

    let err = registry::resolve(&requested(&["candidates", "not_a_group"])).unwrap_err();
    match err {
        ServerError::UnknownToolset { ref name, ref valid } => {
            assert_eq!(name, "not_a_group");
            assert!(valid.contains("candidates"));
            assert!(valid.contains("events"));
        }
        ref other => panic!("expected UnknownToolset, got {other}"),
    }

    // Nothing reached the host
    assert_eq!(host.tool_count(), 0);
    assert!(host.list_tools().is_empty());
}

#[test]
fn registering_the_same_selection_twice_is_rejected() {
    let client = test_client();
    let mut host = McpServer::with_defaults();

    let selection = registry::resolve(&requested(&["tasks"])).unwrap();
    let report = registry::register(selection.clone(), &mut host, &client).unwrap();
    assert_eq!(report.total, 5);

    let err = registry::register(selection, &mut host, &client).unwrap_err();
    assert!(err.to_string().contains("Duplicate tool name"));
    // The table did not double-count
    assert_eq!(host.tool_count(), 5);
}

#[test]
fn report_order_follows_catalog_order() {
    let client = test_client();

    // Request in an order that differs from the catalog's
    let selection = registry::resolve(&requested(&["tasks", "candidates", "jobs"])).unwrap();
    let mut host = McpServer::with_defaults();
    let report = registry::register(selection, &mut host, &client).unwrap();

    let names: Vec<&str> = report.per_toolset.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["candidates", "jobs", "tasks"]);

    // A second run with the same selection produces the same ordering
    let selection = registry::resolve(&requested(&["tasks", "candidates", "jobs"])).unwrap();
    let mut host = McpServer::with_defaults();
    let second = registry::register(selection, &mut host, &client).unwrap();
    assert_eq!(report, second);
}

#[test]
fn tasks_selection_yields_exactly_the_tasks_tools() {
    let client = test_client();
    let mut host = McpServer::with_defaults();

    let selection = registry::resolve(&requested(&["tasks"])).unwrap();
    let report = registry::register(selection, &mut host, &client).unwrap();

    assert_eq!(report.per_toolset, vec![("tasks".to_string(), 5)]);
    assert_eq!(report.total, 5);
    assert_eq!(host.tool_count(), 5);

    let names: Vec<String> = host.list_tools().into_iter().map(|t| t.name).collect();
    assert_eq!(
        names,
        vec!["list_tasks", "get_task", "create_task", "update_task", "delete_task"]
    );
}

#[test]
fn full_catalog_registers_every_tool_exactly_once() {
    let client = test_client();
    let mut host = McpServer::with_defaults();

    let selection = registry::resolve(&requested(&["all"])).unwrap();
    let report = registry::register(selection, &mut host, &client).unwrap();

    let declared: usize = catalog().iter().map(|entry| entry.tool_count()).sum();
    assert_eq!(report.total, declared);
    assert_eq!(host.tool_count(), declared);
    assert_eq!(report.per_toolset.len(), catalog().len());

    // Report counts agree with each toolset's tool table
    for entry in catalog() {
        assert_eq!(report.count_for(entry.name), Some(entry.tool_count()));
    }
}

#[test]
fn default_selection_covers_the_core_toolsets() {
    let names = requested(DEFAULT_TOOLSETS);
    let selection = registry::resolve(&names).unwrap();
    assert_eq!(selection.len(), DEFAULT_TOOLSETS.len());
    for name in DEFAULT_TOOLSETS {
        assert!(selection.contains(name), "default set should include {name}");
    }
}

#[test]
fn empty_selection_is_a_configuration_error() {
    let err = registry::resolve(&BTreeSet::new()).unwrap_err();
    assert!(matches!(err, ServerError::Config { .. }));
}
