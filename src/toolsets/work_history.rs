//! Work history toolset
//!
//! Entries are created through the candidates toolset
//! (`create_candidate_work_history`); this toolset manages existing entries.

use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register all work history tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    let work_history_id =
        || Param::id("work_history_id", "Unique identifier for the work history entry");

    vec![
        EndpointTool::get(
            "get_work_history",
            "Get detailed information about a specific work history entry.",
            "/work_history/{work_history_id}",
        )
        .path_param(work_history_id()),
        EndpointTool::put(
            "update_work_history",
            "Update an existing work history entry.",
            "/work_history/{work_history_id}",
        )
        .path_param(work_history_id())
        .body(Param::string("company_name", "Updated company name").optional())
        .body(Param::string("title", "Updated job title").optional())
        .body(Param::string("start_date", "Updated start date (YYYY-MM-DD)").optional())
        .body(Param::string("end_date", "Updated end date (YYYY-MM-DD)").optional())
        .body(Param::string("description", "Updated job description").optional())
        .body(
            Param::boolean("currently_employed", "Whether the candidate is currently employed here")
                .optional(),
        ),
        EndpointTool::delete(
            "delete_work_history",
            "Delete a work history entry (permanent).",
            "/work_history/{work_history_id}",
        )
        .path_param(work_history_id()),
    ]
}
