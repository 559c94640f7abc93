//! Pipeline management toolset
//!
//! Pipeline entries (a candidate in a job's workflow), their workflows, and
//! status/stage transitions.

use super::{page, per_page};
use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register all pipeline management tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    let pipeline_id = || Param::integer("pipeline_id", "The unique identifier of the pipeline");
    let workflow_id = || Param::integer("workflow_id", "The unique identifier of the workflow");

    vec![
        EndpointTool::get("list_pipelines", "List all pipelines with pagination.", "/pipelines")
            .query(per_page(25))
            .query(page()),
        EndpointTool::get(
            "get_pipeline",
            "Get detailed information about a specific pipeline.",
            "/pipelines/{pipeline_id}",
        )
        .path_param(pipeline_id()),
        EndpointTool::post(
            "create_pipeline",
            "Create a new pipeline entry (candidate in job pipeline).",
            "/pipelines",
        )
        .body(Param::string("name", "Pipeline name"))
        .body(Param::integer("job_id", "Associated job ID").optional())
        .body(Param::integer("candidate_id", "Associated candidate ID").optional())
        .body(Param::integer("status_id", "Initial status/stage ID").optional()),
        EndpointTool::put(
            "update_pipeline",
            "Update a pipeline's properties.",
            "/pipelines/{pipeline_id}",
        )
        .path_param(pipeline_id())
        .body(Param::string("name", "Updated pipeline name").optional())
        .body(Param::integer("status_id", "Updated status/stage ID").optional()),
        EndpointTool::delete(
            "delete_pipeline",
            "Delete a pipeline entry.",
            "/pipelines/{pipeline_id}",
        )
        .path_param(pipeline_id()),
        EndpointTool::get(
            "filter_pipelines",
            "Filter pipelines by job, candidate, or status.",
            "/pipelines",
        )
        .query(Param::integer("job_id", "Filter by job ID").optional())
        .query(Param::integer("candidate_id", "Filter by candidate ID").optional())
        .query(Param::integer("status_id", "Filter by status/stage ID").optional())
        .query(per_page(25))
        .query(page()),
        EndpointTool::get(
            "list_pipeline_workflows",
            "List all workflows for a pipeline.",
            "/pipelines/{pipeline_id}/workflows",
        )
        .path_param(pipeline_id()),
        EndpointTool::get(
            "get_pipeline_workflow",
            "Get details of a specific pipeline workflow.",
            "/pipelines/{pipeline_id}/workflows/{workflow_id}",
        )
        .path_param(pipeline_id())
        .path_param(workflow_id()),
        EndpointTool::get(
            "list_pipeline_workflow_statuses",
            "List all statuses/stages in a workflow.",
            "/workflows/{workflow_id}/statuses",
        )
        .path_param(workflow_id()),
        EndpointTool::get(
            "get_pipeline_workflow_status",
            "Get details of a specific workflow status.",
            "/workflows/{workflow_id}/statuses/{status_id}",
        )
        .path_param(workflow_id())
        .path_param(Param::integer("status_id", "The unique identifier of the status")),
        EndpointTool::get(
            "get_pipeline_statuses",
            "Get available statuses for a pipeline.",
            "/pipelines/{pipeline_id}/statuses",
        )
        .path_param(pipeline_id()),
        EndpointTool::put(
            "change_pipeline_status",
            "Move a pipeline to a different status/stage.",
            "/pipelines/{pipeline_id}/status",
        )
        .path_param(pipeline_id())
        .body(Param::integer("status_id", "The target status/stage ID"))
        .body(Param::string("notes", "Notes about the status change").optional()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_table_is_well_formed() {
        let tools = tools();
        assert_eq!(tools.len(), 12);
        for tool in &tools {
            jsonschema::JSONSchema::compile(&tool.input_schema())
                .unwrap_or_else(|e| panic!("bad schema for {}: {e}", tool.name));
        }
    }
}
