//! Backup toolset
//!
//! Backups are asynchronous snapshots of all CATS data. Statuses: pending,
//! processing, completed, expired; backups expire after 90 days.

use super::{page, per_page};
use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register backup tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    vec![
        EndpointTool::get("list_backups", "List all system backups.", "/backups")
            .query(per_page(25))
            .query(page())
            .query(
                Param::string("status", "Filter by status (pending, processing, completed, expired)")
                    .optional(),
            ),
        EndpointTool::get(
            "get_backup",
            "Get details of a specific backup. Poll this to monitor progress.",
            "/backups/{backup_id}",
        )
        .path_param(Param::id("backup_id", "The unique identifier of the backup")),
        EndpointTool::post(
            "create_backup",
            "Create a new full system backup (asynchronous; monitor with get_backup).",
            "/backups",
        )
        .body(Param::boolean("include_attachments", "Include attachment files").default(true))
        .body(Param::boolean("include_emails", "Include email history").default(true))
        .body(Param::string("description", "Description for the backup").optional()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_table_is_well_formed() {
        assert_eq!(tools().len(), 3);
    }

    #[test]
    fn backup_options_default_to_full_capture() {
        let tool = tools().into_iter().find(|t| t.name == "create_backup").unwrap();
        let bound = tool.bind(&json!({})).unwrap();
        assert_eq!(
            bound.body,
            Some(json!({"include_attachments": true, "include_emails": true}))
        );
    }
}
