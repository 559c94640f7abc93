//! Candidate management toolset
//!
//! Core recruiting operations: candidate records plus their pipelines,
//! activities, attachments, custom fields, emails, phones, tags, and work
//! history.

use super::{page, per_page};
use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register all candidate management tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    let candidate_id = || Param::integer("candidate_id", "The unique identifier of the candidate");

    vec![
        // Main candidate operations
        EndpointTool::get(
            "list_candidates",
            "List all candidates with pagination.",
            "/candidates",
        )
        .query(per_page(25))
        .query(page()),
        EndpointTool::get(
            "get_candidate",
            "Get detailed information about a specific candidate.",
            "/candidates/{candidate_id}",
        )
        .path_param(candidate_id()),
        EndpointTool::post(
            "create_candidate",
            "Create a new candidate in the system.",
            "/candidates",
        )
        .body(Param::string("first_name", "Candidate's first name"))
        .body(Param::string("last_name", "Candidate's last name"))
        .body(Param::string("email", "Email address"))
        .body(Param::string("phone", "Phone number").optional())
        .body(Param::string("resume_url", "URL to resume document").optional())
        .body(Param::string("linkedin_url", "LinkedIn profile URL").optional()),
        EndpointTool::put(
            "update_candidate",
            "Update an existing candidate's information.",
            "/candidates/{candidate_id}",
        )
        .path_param(candidate_id())
        .body(Param::string("first_name", "Updated first name").optional())
        .body(Param::string("last_name", "Updated last name").optional())
        .body(Param::string("email", "Updated email address").optional())
        .body(Param::string("phone", "Updated phone number").optional()),
        EndpointTool::delete(
            "delete_candidate",
            "Permanently delete a candidate from the system. Consider archiving instead.",
            "/candidates/{candidate_id}",
        )
        .path_param(candidate_id()),
        EndpointTool::get(
            "search_candidates",
            "Search candidates by name, email, or other fields.",
            "/candidates/search",
        )
        .query(Param::string("query", "Search query string").wire("q"))
        .query(per_page(25)),
        EndpointTool::post(
            "filter_candidates",
            "Filter candidates with advanced criteria.",
            "/candidates/search",
        )
        .body(Param::string("status", "Filter by candidate status").optional())
        .body(Param::integer("job_id", "Filter by specific job ID").optional())
        .query(per_page(25))
        .query(page()),
        EndpointTool::post(
            "authorize_candidate",
            "Authorize a candidate action (e.g., portal access).",
            "/candidates/authorization",
        )
        .body(Param::integer("candidate_id", "The unique identifier of the candidate"))
        .body(Param::string("action", "The authorization action to perform")),
        // Candidate sub-resources
        EndpointTool::get(
            "list_candidate_pipelines",
            "List all pipelines associated with a candidate.",
            "/candidates/{candidate_id}/pipelines",
        )
        .path_param(candidate_id())
        .query(per_page(25)),
        EndpointTool::get(
            "list_candidate_activities",
            "List all activities for a candidate.",
            "/candidates/{candidate_id}/activities",
        )
        .path_param(candidate_id())
        .query(per_page(25)),
        EndpointTool::post(
            "create_candidate_activity",
            "Create a new activity for a candidate.",
            "/activities",
        )
        .body(Param::integer("candidate_id", "The unique identifier of the candidate"))
        .body(
            Param::string(
                "activity_type",
                "Type of activity (e.g., 'meeting_scheduled', 'email_sent')",
            )
            .wire("type"),
        )
        .body(Param::string("description", "Description of the activity"))
        .body(Param::string("date", "Activity date in ISO format").optional()),
        EndpointTool::get(
            "list_candidate_attachments",
            "List all attachments for a candidate (resume, cover letter, etc).",
            "/candidates/{candidate_id}/attachments",
        )
        .path_param(candidate_id())
        .query(per_page(25)),
        EndpointTool::post(
            "upload_candidate_attachment",
            "Upload an attachment for a candidate.",
            "/attachments",
        )
        .body(Param::integer("candidate_id", "The unique identifier of the candidate"))
        .body(Param::string("file_name", "Name of the file"))
        .body(Param::string("file_type", "Type of file (e.g., 'resume', 'cover_letter')"))
        .body(Param::string("file_url", "URL to the file to upload")),
        EndpointTool::get(
            "list_candidate_custom_fields",
            "Get all custom fields for a candidate.",
            "/candidates/{candidate_id}/custom_fields",
        )
        .path_param(candidate_id()),
        EndpointTool::get(
            "list_candidate_emails",
            "List all email addresses for a candidate.",
            "/candidates/{candidate_id}/emails",
        )
        .path_param(candidate_id())
        .query(per_page(25)),
        EndpointTool::post(
            "create_candidate_email",
            "Add a new email address for a candidate.",
            "/candidates/{candidate_id}/emails",
        )
        .path_param(candidate_id())
        .body(Param::string("email", "Email address to add"))
        .body(
            Param::string("email_type", "Type of email (e.g., 'personal', 'work')")
                .default("personal")
                .wire("type"),
        ),
        EndpointTool::put(
            "update_candidate_email",
            "Update a candidate's email address.",
            "/emails/{email_id}",
        )
        .path_param(Param::integer("email_id", "The unique identifier of the email"))
        .body(Param::string("email", "Updated email address"))
        .body(Param::integer("candidate_id", "The unique identifier of the candidate"))
        .body(Param::string("email_type", "Updated email type").optional().wire("type")),
        EndpointTool::delete(
            "delete_candidate_email",
            "Delete a candidate's email address.",
            "/emails/{email_id}",
        )
        .path_param(Param::integer("email_id", "The unique identifier of the email to delete")),
        EndpointTool::get(
            "list_candidate_phones",
            "List all phone numbers for a candidate.",
            "/candidates/{candidate_id}/phones",
        )
        .path_param(candidate_id())
        .query(per_page(25)),
        EndpointTool::post(
            "create_candidate_phone",
            "Add a new phone number for a candidate.",
            "/phones",
        )
        .body(Param::integer("candidate_id", "The unique identifier of the candidate"))
        .body(Param::string("phone", "Phone number to add"))
        .body(
            Param::string("phone_type", "Type of phone (e.g., 'mobile', 'home', 'work')")
                .default("mobile")
                .wire("type"),
        ),
        EndpointTool::put(
            "update_candidate_phone",
            "Update a candidate's phone number.",
            "/phones/{phone_id}",
        )
        .path_param(Param::integer("phone_id", "The unique identifier of the phone"))
        .body(Param::string("phone", "Updated phone number"))
        .body(Param::string("phone_type", "Updated phone type").optional().wire("type")),
        EndpointTool::delete(
            "delete_candidate_phone",
            "Delete a candidate's phone number.",
            "/phones/{phone_id}",
        )
        .path_param(Param::integer("phone_id", "The unique identifier of the phone to delete")),
        EndpointTool::get(
            "list_candidate_tags",
            "List all tags assigned to a candidate.",
            "/candidates/{candidate_id}/tags",
        )
        .path_param(candidate_id()),
        EndpointTool::put(
            "replace_candidate_tags",
            "Replace all tags for a candidate (removes existing, adds new).",
            "/candidates/{candidate_id}/tags",
        )
        .path_param(candidate_id())
        .body(Param::int_array("tag_ids", "List of tag IDs to assign")),
        EndpointTool::post(
            "attach_candidate_tags",
            "Add tags to a candidate (keeps existing tags).",
            "/candidates/{candidate_id}/tags",
        )
        .path_param(candidate_id())
        .body(Param::int_array("tag_ids", "List of tag IDs to add")),
        EndpointTool::delete(
            "delete_candidate_tag",
            "Remove a specific tag from a candidate.",
            "/candidates/{candidate_id}/tags",
        )
        .path_param(candidate_id())
        .body(Param::integer("tag_id", "The unique identifier of the tag to remove")),
        EndpointTool::get(
            "list_candidate_work_history",
            "List all work history entries for a candidate.",
            "/candidates/{candidate_id}/work_history",
        )
        .path_param(candidate_id())
        .query(per_page(25)),
        EndpointTool::post(
            "create_candidate_work_history",
            "Add a work history entry for a candidate.",
            "/candidates/{candidate_id}/work_history",
        )
        .path_param(candidate_id())
        .body(Param::string("company", "Company name"))
        .body(Param::string("title", "Job title"))
        .body(Param::string("start_date", "Start date in ISO format (YYYY-MM-DD)"))
        .body(Param::string("end_date", "End date in ISO format (null for current)").optional())
        .body(Param::string("description", "Job description").optional()),
    ]
}
