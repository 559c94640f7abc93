//! Job management toolset
//!
//! Job postings and their sub-resources, job lists/collections, and
//! applications.

use super::{page, per_page};
use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use serde_json::json;
use std::sync::Arc;

/// Register all job management tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    let job_id = || Param::integer("job_id", "The unique identifier of the job");
    let list_id = || Param::integer("list_id", "The unique identifier of the list");

    vec![
        // Main job operations
        EndpointTool::get("list_jobs", "List all jobs with pagination.", "/jobs")
            .query(per_page(25))
            .query(page()),
        EndpointTool::get(
            "get_job",
            "Get detailed information about a specific job.",
            "/jobs/{job_id}",
        )
        .path_param(job_id()),
        EndpointTool::post("create_job", "Create a new job posting.", "/jobs")
            .body(Param::string("title", "Job title"))
            .body(Param::string("description", "Job description"))
            .body(Param::string("employment_type", "Type of employment").default("full-time"))
            .body(Param::string("department", "Department name").optional())
            .body(Param::string("location", "Job location").optional())
            .body(Param::integer("salary_min", "Minimum salary").optional())
            .body(Param::integer("salary_max", "Maximum salary").optional()),
        EndpointTool::put(
            "update_job",
            "Update an existing job posting.",
            "/jobs/{job_id}",
        )
        .path_param(job_id())
        .body(Param::string("title", "Updated job title").optional())
        .body(Param::string("description", "Updated job description").optional())
        .body(Param::string("status", "Updated job status").optional())
        .body(Param::string("location", "Updated job location").optional()),
        EndpointTool::delete(
            "delete_job",
            "Permanently delete a job posting. Consider closing the job instead.",
            "/jobs/{job_id}",
        )
        .path_param(job_id()),
        EndpointTool::get(
            "search_jobs",
            "Search jobs by title, description, or other fields.",
            "/jobs/search",
        )
        .query(Param::string("query", "Search query string").wire("q"))
        .query(per_page(25)),
        EndpointTool::post(
            "filter_jobs",
            "Filter jobs with advanced criteria.",
            "/jobs/search",
        )
        .body(Param::string("status", "Filter by job status").optional())
        .body(Param::string("department", "Filter by department").optional())
        .body(Param::string("location", "Filter by location").optional())
        .query(per_page(25))
        .query(page()),
        // Job sub-resources
        EndpointTool::get(
            "list_job_pipelines",
            "List all pipelines for a job.",
            "/jobs/{job_id}/pipelines",
        )
        .path_param(job_id())
        .query(per_page(25)),
        EndpointTool::get(
            "list_job_candidates",
            "List all candidates who applied to a job.",
            "/jobs/{job_id}/candidates",
        )
        .path_param(job_id())
        .query(per_page(25)),
        EndpointTool::get(
            "list_job_activities",
            "List all activities for a job.",
            "/jobs/{job_id}/activities",
        )
        .path_param(job_id())
        .query(per_page(25)),
        EndpointTool::get(
            "list_job_attachments",
            "List all attachments for a job.",
            "/jobs/{job_id}/attachments",
        )
        .path_param(job_id())
        .query(per_page(25)),
        EndpointTool::get(
            "list_job_custom_fields",
            "Get all custom fields for a job.",
            "/jobs/{job_id}/custom_fields",
        )
        .path_param(job_id()),
        EndpointTool::put(
            "update_job_custom_fields",
            "Update custom fields for a job.",
            "/jobs/{job_id}/custom_fields",
        )
        .path_param(job_id())
        .body_expand(Param::object("fields", "Custom field key-value pairs")),
        EndpointTool::get(
            "list_job_tags",
            "List all tags assigned to a job.",
            "/jobs/{job_id}/tags",
        )
        .path_param(job_id()),
        EndpointTool::post(
            "attach_job_tags",
            "Add tags to a job (keeps existing tags).",
            "/jobs/{job_id}/tags",
        )
        .path_param(job_id())
        .body(Param::int_array("tag_ids", "List of tag IDs to add")),
        EndpointTool::delete(
            "delete_job_tag",
            "Remove a specific tag from a job.",
            "/jobs/{job_id}/tags",
        )
        .path_param(job_id())
        .body(Param::integer("tag_id", "The unique identifier of the tag to remove")),
        EndpointTool::get(
            "list_job_tasks",
            "List all tasks associated with a job.",
            "/jobs/{job_id}/tasks",
        )
        .path_param(job_id())
        .query(per_page(25)),
        // Job lists
        EndpointTool::get("list_job_lists", "List all job lists/collections.", "/lists")
            .query(per_page(25))
            .query(page()),
        EndpointTool::get(
            "get_job_list",
            "Get details of a specific job list.",
            "/lists/{list_id}",
        )
        .path_param(list_id()),
        EndpointTool::post("create_job_list", "Create a new job list/collection.", "/lists")
            .body(Param::string("name", "Name of the job list"))
            .body(Param::string("description", "Description of the list").optional())
            .body_literal("type", json!("job")),
        EndpointTool::put(
            "update_job_list",
            "Update a job list's properties.",
            "/lists/{list_id}",
        )
        .path_param(list_id())
        .body(Param::string("name", "Updated list name").optional())
        .body(Param::string("description", "Updated description").optional()),
        EndpointTool::delete("delete_job_list", "Delete a job list.", "/lists/{list_id}")
            .path_param(list_id()),
        EndpointTool::get(
            "list_job_list_items",
            "List all jobs in a specific job list.",
            "/lists/{list_id}/candidates",
        )
        .path_param(list_id())
        .query(per_page(25)),
        EndpointTool::get(
            "get_job_list_item",
            "Get a specific job from a job list.",
            "/lists/{list_id}/candidates/{job_id}",
        )
        .path_param(list_id())
        .path_param(job_id()),
        EndpointTool::post(
            "create_job_list_items",
            "Add jobs to a job list.",
            "/lists/{list_id}/candidates",
        )
        .path_param(list_id())
        // The upstream list API uses 'candidate_ids' generically for list members
        .body(Param::int_array("job_ids", "List of job IDs to add").wire("candidate_ids")),
        EndpointTool::delete(
            "delete_job_list_item",
            "Remove a job from a job list.",
            "/lists/{list_id}/candidates",
        )
        .path_param(list_id())
        .body(Param::integer("job_id", "The unique identifier of the job to remove").wire("candidate_id")),
        // Job applications
        EndpointTool::get(
            "list_job_applications",
            "List all applications for a specific job.",
            "/jobs/{job_id}/applications",
        )
        .path_param(job_id())
        .query(per_page(25))
        .query(page()),
        EndpointTool::get(
            "get_job_application",
            "Get details of a specific application.",
            "/applications/{application_id}",
        )
        .path_param(Param::integer(
            "application_id",
            "The unique identifier of the application",
        )),
        EndpointTool::get(
            "list_job_application_fields",
            "List all application form fields for a job.",
            "/jobs/{job_id}/application_fields",
        )
        .path_param(job_id()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_table_is_well_formed() {
        let tools = tools();
        assert_eq!(tools.len(), 29);
        for tool in &tools {
            jsonschema::JSONSchema::compile(&tool.input_schema())
                .unwrap_or_else(|e| panic!("bad schema for {}: {e}", tool.name));
        }
    }

    #[test]
    fn job_list_creation_pins_the_list_type() {
        let tool = tools()
            .into_iter()
            .find(|t| t.name == "create_job_list")
            .unwrap();
        let bound = tool.bind(&json!({"name": "Q3 openings"})).unwrap();
        assert_eq!(
            bound.body,
            Some(json!({"name": "Q3 openings", "type": "job"}))
        );
    }

    #[test]
    fn list_membership_uses_generic_member_keys() {
        let tool = tools()
            .into_iter()
            .find(|t| t.name == "create_job_list_items")
            .unwrap();
        let bound = tool.bind(&json!({"list_id": 5, "job_ids": [1, 2]})).unwrap();
        assert_eq!(bound.path, "/lists/5/candidates");
        assert_eq!(bound.body, Some(json!({"candidate_ids": [1, 2]})));
    }
}
