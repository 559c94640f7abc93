//! Tag toolset
//!
//! Read access to the global tags list. Attaching and detaching tags happens
//! through the entity-specific tools (candidates, jobs, companies, contacts).

use super::{page, per_page};
use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register tag tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    vec![
        EndpointTool::get("list_tags", "List all tags in the system.", "/tags")
            .query(per_page(25))
            .query(page()),
        EndpointTool::get("get_tag", "Get details of a specific tag.", "/tags/{tag_id}")
            .path_param(Param::id("tag_id", "The unique identifier of the tag")),
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
