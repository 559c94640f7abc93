//! System event stream toolset
//!
//! Events are a chronological audit log of system changes; cursor-based
//! pagination via event ID or timestamp.

use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register event stream tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    vec![EndpointTool::get(
        "list_events",
        "List system events (audit log stream) in chronological order.",
        "/events",
    )
    .query(Param::integer("starting_after_id", "Return events after this event ID").optional())
    .query(
        Param::string(
            "starting_after_timestamp",
            "Return events after this timestamp (ISO 8601 / RFC 3339)",
        )
        .optional(),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cursor_parameters_are_optional() {
        let tool = tools().into_iter().next().unwrap();
        let bound = tool.bind(&json!({})).unwrap();
        assert!(bound.query.is_empty());

        let bound = tool.bind(&json!({"starting_after_id": 88})).unwrap();
        assert_eq!(
            bound.query,
            vec![("starting_after_id".to_string(), "88".to_string())]
        );
    }
}
