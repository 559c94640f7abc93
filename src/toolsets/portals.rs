//! Job portal toolset
//!
//! Portals are external job boards: publishing, applications, and portal
//! registration.

use super::{page, per_page};
use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register all portal tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    let portal_id = || Param::id("portal_id", "Unique identifier for the portal");
    let job_id = || Param::id("job_id", "Job posting ID");

    vec![
        EndpointTool::get("list_portals", "List all job portals/boards.", "/portals")
            .query(per_page(25))
            .query(page()),
        EndpointTool::get(
            "get_portal",
            "Get detailed information about a specific portal.",
            "/portals/{portal_id}",
        )
        .path_param(portal_id()),
        EndpointTool::get(
            "list_portal_jobs",
            "List all jobs published to a specific portal.",
            "/portals/{portal_id}/jobs",
        )
        .path_param(portal_id())
        .query(per_page(25))
        .query(page()),
        EndpointTool::post(
            "submit_job_application",
            "Submit a job application through a portal.",
            "/portals/{portal_id}/jobs/{job_id}",
        )
        .path_param(portal_id())
        .path_param(job_id())
        .body_expand(Param::object(
            "candidate_data",
            "Candidate information (first_name, last_name, email, resume, etc.)",
        )),
        EndpointTool::put(
            "publish_job_to_portal",
            "Publish a job posting to a portal.",
            "/portals/{portal_id}/jobs/{job_id}",
        )
        .path_param(portal_id())
        .path_param(job_id()),
        EndpointTool::delete(
            "unpublish_job_from_portal",
            "Remove a job posting from a portal.",
            "/portals/{portal_id}/jobs/{job_id}",
        )
        .path_param(portal_id())
        .path_param(job_id()),
        EndpointTool::get(
            "get_portal_registration",
            "Get portal registration information and requirements.",
            "/portals/{portal_id}/registration",
        )
        .path_param(portal_id()),
        EndpointTool::post(
            "submit_portal_registration",
            "Submit portal registration information.",
            "/portals/{portal_id}/registration",
        )
        .path_param(portal_id())
        .body_expand(Param::object(
            "registration_data",
            "Registration information (varies by portal)",
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_table_is_well_formed() {
        assert_eq!(tools().len(), 8);
    }

    #[test]
    fn publishing_sends_no_body() {
        let tool = tools()
            .into_iter()
            .find(|t| t.name == "publish_job_to_portal")
            .unwrap();
        let bound = tool.bind(&json!({"portal_id": 3, "job_id": "J-9"})).unwrap();
        assert_eq!(bound.path, "/portals/3/jobs/J-9");
        assert_eq!(bound.body, None);
    }
}
