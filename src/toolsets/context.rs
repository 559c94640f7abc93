//! Context toolset: site and current-user information

use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register context and authorization tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    vec![
        EndpointTool::get(
            "get_site",
            "Get current CATS site information and settings.",
            "/site",
        ),
        EndpointTool::get(
            "get_me",
            "Get the current authenticated user's information.",
            "/users/current",
        ),
        EndpointTool::post(
            "authorize_user",
            "Check if a user is authorized for a specific action.",
            "/authorization",
        )
        .body(Param::integer("user_id", "The unique identifier of the user"))
        .body(Param::string("action", "The action to authorize (e.g., 'read', 'write', 'delete')")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_table_is_well_formed() {
        assert_eq!(tools().len(), 3);
    }
}
