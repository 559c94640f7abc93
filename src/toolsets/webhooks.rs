//! Webhook toolset
//!
//! Webhook deliveries are signed with HMAC-SHA256; verify the
//! `X-CATS-Signature` header against the configured signing key.

use super::{page, per_page};
use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register webhook tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    let webhook_id = || Param::id("webhook_id", "The unique identifier of the webhook");

    vec![
        EndpointTool::get("list_webhooks", "List all configured webhooks.", "/webhooks")
            .query(per_page(25))
            .query(page()),
        EndpointTool::get(
            "get_webhook",
            "Get details of a specific webhook configuration.",
            "/webhooks/{webhook_id}",
        )
        .path_param(webhook_id()),
        EndpointTool::post("create_webhook", "Create a new webhook subscription.", "/webhooks")
            .body(Param::string("target_url", "Target URL for webhook POST requests"))
            .body(Param::string_array(
                "events",
                "Event types to subscribe to (e.g., candidate.created, job.status_changed)",
            ))
            .body(
                Param::string("signing_key", "HMAC-SHA256 key for signature verification")
                    .wire("secret"),
            ),
        EndpointTool::delete(
            "delete_webhook",
            "Delete a webhook subscription. Pending deliveries are cancelled.",
            "/webhooks/{webhook_id}",
        )
        .path_param(webhook_id()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_table_is_well_formed() {
        assert_eq!(tools().len(), 4);
    }

    #[test]
    fn signing_key_is_sent_as_secret() {
        let tool = tools().into_iter().find(|t| t.name == "create_webhook").unwrap();
        let bound = tool
            .bind(&json!({
                "target_url": "https://hooks.test/cats",
                "events": ["candidate.created"],
                "signing_key": "k",
            }))
            .unwrap();
        assert_eq!(
            bound.body,
            Some(json!({
                "target_url": "https://hooks.test/cats",
                "events": ["candidate.created"],
                "secret": "k",
            }))
        );
    }
}
