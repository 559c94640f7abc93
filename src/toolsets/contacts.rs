//! Contact management toolset
//!
//! Contact records and their sub-resources. List and search operations
//! return summarized responses by default; use `get_contact` for full
//! details or pass `fields="all"`.

use super::{page, per_page};
use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register all contact management tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    let contact_id = || Param::id("contact_id", "Unique identifier for the contact");
    let email_id = || Param::id("email_id", "Email record ID");
    let phone_id = || Param::id("phone_id", "Phone record ID");

    vec![
        // Main contact operations
        EndpointTool::get(
            "list_contacts",
            "List contacts with pagination (returns a summary by default). \
             Use get_contact(id) for full details.",
            "/contacts",
        )
        .query(per_page(10))
        .query(page())
        .summarize("contacts"),
        EndpointTool::get(
            "get_contact",
            "Get detailed information about a specific contact.",
            "/contacts/{contact_id}",
        )
        .path_param(contact_id()),
        EndpointTool::post("create_contact", "Create a new contact record.", "/contacts")
            .body(Param::string("first_name", "Contact's first name"))
            .body(Param::string("last_name", "Contact's last name"))
            .body(Param::string("email", "Contact's email address"))
            .body(Param::integer("company_id", "Associated company ID").optional())
            .body(Param::string("title", "Job title").optional())
            .body(Param::string("phone", "Phone number").optional())
            .body(Param::string("notes", "Additional notes").optional()),
        EndpointTool::put(
            "update_contact",
            "Update an existing contact record.",
            "/contacts/{contact_id}",
        )
        .path_param(contact_id())
        .body(Param::string("first_name", "Updated first name").optional())
        .body(Param::string("last_name", "Updated last name").optional())
        .body(Param::string("email", "Updated email address").optional())
        .body(Param::integer("company_id", "Updated company association").optional())
        .body(Param::string("title", "Updated job title").optional())
        .body(Param::string("phone", "Updated phone number").optional())
        .body(Param::string("notes", "Updated notes").optional()),
        EndpointTool::delete(
            "delete_contact",
            "Delete a contact record (permanent).",
            "/contacts/{contact_id}",
        )
        .path_param(contact_id()),
        EndpointTool::get(
            "search_contacts",
            "Search contacts by name, email, or other criteria (returns a summary by default).",
            "/contacts/search",
        )
        .query(Param::string("query", "Search query string"))
        .query(per_page(10))
        .summarize("contacts"),
        EndpointTool::post(
            "filter_contacts",
            "Filter contacts using advanced criteria (returns a summary by default).",
            "/contacts/search",
        )
        .body_expand(Param::object(
            "filters",
            "Filter criteria (e.g., {\"company_id\": 123, \"title\": \"Manager\"})",
        ))
        .body(per_page(10))
        .body(page())
        .summarize("contacts"),
        // Contact sub-resources
        EndpointTool::get(
            "list_contact_activities",
            "List all activities for a specific contact.",
            "/contacts/{contact_id}/activities",
        )
        .path_param(contact_id())
        .query(per_page(25))
        .query(page()),
        EndpointTool::post(
            "create_contact_activity",
            "Create an activity for a contact.",
            "/contacts/{contact_id}/activities",
        )
        .path_param(contact_id())
        .body(
            Param::string(
                "activity_type",
                "Type (email, meeting, call_talked, call_lvm, call_missed, text_message, other)",
            )
            .wire("type"),
        )
        .body(Param::string("description", "Activity description"))
        .body(Param::string("notes", "Additional notes").optional()),
        EndpointTool::get(
            "list_contact_attachments",
            "List all attachments for a contact.",
            "/contacts/{contact_id}/attachments",
        )
        .path_param(contact_id())
        .query(per_page(25))
        .query(page()),
        EndpointTool::post(
            "upload_contact_attachment",
            "Upload an attachment to a contact.",
            "/contacts/{contact_id}/attachments",
        )
        .path_param(contact_id())
        .body_expand(Param::object("file_data", "File upload data")),
        EndpointTool::get(
            "get_contact_custom_fields",
            "Get custom fields for a contact.",
            "/contacts/{contact_id}/custom_fields",
        )
        .path_param(contact_id()),
        EndpointTool::get(
            "list_contact_emails",
            "List all email addresses for a contact.",
            "/contacts/{contact_id}/emails",
        )
        .path_param(contact_id())
        .query(per_page(25))
        .query(page()),
        EndpointTool::post(
            "create_contact_email",
            "Add an email address to a contact.",
            "/contacts/{contact_id}/emails",
        )
        .path_param(contact_id())
        .body(Param::string("email", "Email address"))
        .body(
            Param::string("email_type", "Type (work, personal, other)")
                .default("work")
                .wire("type"),
        ),
        EndpointTool::put(
            "update_contact_email",
            "Update a contact's email address.",
            "/contacts/{contact_id}/emails/{email_id}",
        )
        .path_param(contact_id())
        .path_param(email_id())
        .body(Param::string("email", "Updated email address"))
        .body(Param::string("email_type", "Updated type (work, personal, other)").wire("type")),
        EndpointTool::delete(
            "delete_contact_email",
            "Delete a contact's email address.",
            "/contacts/{contact_id}/emails/{email_id}",
        )
        .path_param(contact_id())
        .path_param(email_id()),
        EndpointTool::get(
            "list_contact_phones",
            "List all phone numbers for a contact.",
            "/contacts/{contact_id}/phones",
        )
        .path_param(contact_id())
        .query(per_page(25))
        .query(page()),
        EndpointTool::post(
            "create_contact_phone",
            "Add a phone number to a contact.",
            "/contacts/{contact_id}/phones",
        )
        .path_param(contact_id())
        .body(Param::string("phone", "Phone number"))
        .body(
            Param::string("phone_type", "Type (work, mobile, home, other)")
                .default("work")
                .wire("type"),
        ),
        EndpointTool::put(
            "update_contact_phone",
            "Update a contact's phone number.",
            "/contacts/{contact_id}/phones/{phone_id}",
        )
        .path_param(contact_id())
        .path_param(phone_id())
        .body(Param::string("phone", "Updated phone number"))
        .body(Param::string("phone_type", "Updated type (work, mobile, home, other)").wire("type")),
        EndpointTool::delete(
            "delete_contact_phone",
            "Delete a contact's phone number.",
            "/contacts/{contact_id}/phones/{phone_id}",
        )
        .path_param(contact_id())
        .path_param(phone_id()),
        EndpointTool::get(
            "list_contact_pipelines",
            "List all pipelines associated with a contact.",
            "/contacts/{contact_id}/pipelines",
        )
        .path_param(contact_id()),
        EndpointTool::get(
            "list_contact_tags",
            "List all tags applied to a contact.",
            "/contacts/{contact_id}/tags",
        )
        .path_param(contact_id()),
        EndpointTool::post(
            "replace_contact_tags",
            "Replace all tags on a contact (replaces existing tags).",
            "/contacts/{contact_id}/tags",
        )
        .path_param(contact_id())
        .body(Param::int_array("tag_ids", "List of tag IDs to apply")),
        EndpointTool::put(
            "attach_contact_tags",
            "Attach additional tags to a contact (additive).",
            "/contacts/{contact_id}/tags",
        )
        .path_param(contact_id())
        .body(Param::int_array("tag_ids", "List of tag IDs to add")),
        EndpointTool::delete(
            "delete_contact_tag",
            "Remove a specific tag from a contact.",
            "/contacts/{contact_id}/tags/{tag_id}",
        )
        .path_param(contact_id())
        .path_param(Param::id("tag_id", "Tag ID to remove")),
        EndpointTool::get(
            "get_contact_custom_field",
            "Get a specific custom field for a contact.",
            "/contacts/{contact_id}/custom_fields/{field_id}",
        )
        .path_param(contact_id())
        .path_param(Param::id("field_id", "Custom field ID")),
        EndpointTool::get(
            "get_contact_thumbnail",
            "Get a contact's thumbnail image.",
            "/contacts/{contact_id}/thumbnail",
        )
        .path_param(contact_id()),
        EndpointTool::put(
            "change_contact_thumbnail",
            "Update a contact's thumbnail image.",
            "/contacts/{contact_id}/thumbnail",
        )
        .path_param(contact_id())
        .body(Param::string("image_data", "Base64 encoded image data or image URL").wire("image")),
    ]
}
