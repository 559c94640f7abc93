//! Task management toolset

use super::{page, per_page};
use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register task management tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    let task_id = || Param::integer("task_id", "The unique identifier of the task");

    vec![
        EndpointTool::get("list_tasks", "List all tasks with pagination.", "/tasks")
            .query(per_page(25))
            .query(page()),
        EndpointTool::get(
            "get_task",
            "Get detailed information about a specific task.",
            "/tasks/{task_id}",
        )
        .path_param(task_id()),
        EndpointTool::post("create_task", "Create a new task.", "/tasks")
            .body(Param::string("title", "Task title"))
            .body(Param::string("due_date", "Due date in ISO format").optional())
            .body(Param::integer("candidate_id", "Associated candidate ID").optional())
            .body(Param::integer("job_id", "Associated job ID").optional())
            .body(Param::integer("assigned_to", "User ID to assign the task to").optional())
            .body(Param::string("description", "Task description").optional()),
        EndpointTool::put("update_task", "Update an existing task.", "/tasks/{task_id}")
            .path_param(task_id())
            .body(Param::string("title", "Updated task title").optional())
            .body(Param::string("due_date", "Updated due date").optional())
            .body(Param::string("status", "Updated task status").optional())
            .body(Param::integer("assigned_to", "Updated assignee user ID").optional())
            .body(Param::string("description", "Updated description").optional()),
        EndpointTool::delete("delete_task", "Delete a task.", "/tasks/{task_id}")
            .path_param(task_id()),
    ]
}
