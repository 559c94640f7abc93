//! User toolset (read-only)
//!
//! Users are team members with access to the CATS system; access levels are
//! read_only, edit, and admin.

use super::{page, per_page};
use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register user tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    vec![
        EndpointTool::get("list_users", "List all users in the organization.", "/users")
            .query(per_page(25))
            .query(page()),
        EndpointTool::get("get_user", "Get details of a specific user.", "/users/{user_id}")
            .path_param(Param::id("user_id", "The unique identifier of the user")),
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
