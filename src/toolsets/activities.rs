//! Activity log toolset
//!
//! Activity types: email, meeting, call_talked, call_lvm, call_missed,
//! text_message, other. Creation happens through the entity-specific tools
//! (candidates, companies, contacts).

use super::{page, per_page};
use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register all activity tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    let activity_id = || Param::id("activity_id", "Unique identifier for the activity");

    vec![
        EndpointTool::get("list_activities", "List all activities with pagination.", "/activities")
            .query(per_page(25))
            .query(page()),
        EndpointTool::get(
            "get_activity",
            "Get detailed information about a specific activity.",
            "/activities/{activity_id}",
        )
        .path_param(activity_id()),
        EndpointTool::put(
            "update_activity",
            "Update an existing activity.",
            "/activities/{activity_id}",
        )
        .path_param(activity_id())
        .body(Param::string("activity_type", "Updated activity type").optional().wire("type"))
        .body(Param::string("description", "Updated description").optional())
        .body(Param::string("notes", "Updated notes").optional())
        .body(Param::boolean("completed", "Mark as completed").optional()),
        EndpointTool::delete(
            "delete_activity",
            "Delete an activity record (permanent).",
            "/activities/{activity_id}",
        )
        .path_param(activity_id()),
        EndpointTool::get(
            "search_activities",
            "Search activities by description or other criteria.",
            "/activities/search",
        )
        .query(Param::string("query", "Search query string"))
        .query(per_page(25)),
        EndpointTool::post(
            "filter_activities",
            "Filter activities using advanced criteria.",
            "/activities/search",
        )
        .body_expand(Param::object(
            "filters",
            "Filter criteria (e.g., {\"type\": \"meeting\", \"completed\": false})",
        ))
        .body(per_page(25))
        .body(page()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_table_is_well_formed() {
        assert_eq!(tools().len(), 6);
    }
}
