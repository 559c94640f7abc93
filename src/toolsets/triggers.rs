//! Trigger toolset (read-only)
//!
//! Triggers fire automated actions on pipeline status changes. They are
//! configured in the CATS UI and cannot be created through the API; this
//! toolset provides read access for monitoring.

use super::{page, per_page};
use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register trigger tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    vec![
        EndpointTool::get("list_triggers", "List all configured triggers.", "/triggers")
            .query(per_page(25))
            .query(page()),
        EndpointTool::get(
            "get_trigger",
            "Get details of a specific trigger configuration.",
            "/triggers/{trigger_id}",
        )
        .path_param(Param::id("trigger_id", "The unique identifier of the trigger")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_table_is_well_formed() {
        assert_eq!(tools().len(), 2);
    }
}
