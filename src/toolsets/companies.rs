//! Company management toolset
//!
//! Company records and their sub-resources. List and search operations
//! return summarized responses by default; use `get_company` for full
//! details or pass `fields="all"`.

use super::{page, per_page};
use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register all company management tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    let company_id = || Param::id("company_id", "Unique identifier for the company");
    let phone_id = || Param::id("phone_id", "Phone record ID");

    vec![
        // Main company operations
        EndpointTool::get(
            "list_companies",
            "List companies with pagination (returns a summary by default). \
             Use get_company(id) for full details.",
            "/companies",
        )
        .query(per_page(10))
        .query(page())
        .summarize("companies"),
        EndpointTool::get(
            "get_company",
            "Get detailed information about a specific company.",
            "/companies/{company_id}",
        )
        .path_param(company_id()),
        EndpointTool::post("create_company", "Create a new company record.", "/companies")
            .body(Param::string("name", "Company name"))
            .body(Param::string("website", "Company website URL").optional())
            .body(Param::string("phone", "Company phone number").optional())
            .body(Param::string("address", "Street address").optional())
            .body(Param::string("city", "City").optional())
            .body(Param::string("state", "State/province").optional())
            .body(Param::string("zip_code", "ZIP or postal code").optional())
            .body(Param::string("notes", "Additional notes about the company").optional()),
        EndpointTool::put(
            "update_company",
            "Update an existing company record.",
            "/companies/{company_id}",
        )
        .path_param(company_id())
        .body(Param::string("name", "Updated company name").optional())
        .body(Param::string("website", "Updated website URL").optional())
        .body(Param::string("phone", "Updated phone number").optional())
        .body(Param::string("address", "Updated street address").optional())
        .body(Param::string("city", "Updated city").optional())
        .body(Param::string("state", "Updated state/province").optional())
        .body(Param::string("zip_code", "Updated ZIP/postal code").optional())
        .body(Param::string("notes", "Updated notes").optional()),
        EndpointTool::delete(
            "delete_company",
            "Delete a company record (permanent). Consider archiving instead.",
            "/companies/{company_id}",
        )
        .path_param(company_id()),
        EndpointTool::get(
            "search_companies",
            "Search companies by name or other criteria (returns a summary by default).",
            "/companies/search",
        )
        .query(Param::string("query", "Search query string"))
        .query(per_page(10))
        .summarize("companies"),
        EndpointTool::post(
            "filter_companies",
            "Filter companies using advanced criteria (returns a summary by default).",
            "/companies/search",
        )
        .body_expand(Param::object(
            "filters",
            "Filter criteria (e.g., {\"city\": \"San Francisco\", \"state\": \"CA\"})",
        ))
        .body(per_page(10))
        .body(page())
        .summarize("companies"),
        // Company sub-resources
        EndpointTool::get(
            "list_company_activities",
            "List all activities for a specific company.",
            "/companies/{company_id}/activities",
        )
        .path_param(company_id())
        .query(per_page(25))
        .query(page()),
        EndpointTool::post(
            "create_company_activity",
            "Create an activity for a company.",
            "/companies/{company_id}/activities",
        )
        .path_param(company_id())
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
            "list_company_attachments",
            "List all attachments for a company.",
            "/companies/{company_id}/attachments",
        )
        .path_param(company_id())
        .query(per_page(25))
        .query(page()),
        EndpointTool::post(
            "upload_company_attachment",
            "Upload an attachment to a company.",
            "/companies/{company_id}/attachments",
        )
        .path_param(company_id())
        .body_expand(Param::object("file_data", "File upload data")),
        EndpointTool::get(
            "list_company_contacts",
            "List all contacts associated with a company.",
            "/companies/{company_id}/contacts",
        )
        .path_param(company_id())
        .query(per_page(25))
        .query(page()),
        EndpointTool::get(
            "get_company_custom_fields",
            "Get custom fields for a company.",
            "/companies/{company_id}/custom_fields",
        )
        .path_param(company_id()),
        EndpointTool::get(
            "list_company_departments",
            "List all departments within a company.",
            "/companies/{company_id}/departments",
        )
        .path_param(company_id()),
        EndpointTool::post(
            "create_company_department",
            "Create a new department for a company.",
            "/companies/{company_id}/departments",
        )
        .path_param(company_id())
        .body(Param::string("name", "Department name"))
        .body(Param::string("description", "Department description").optional()),
        EndpointTool::put(
            "update_company_department",
            "Update a company department.",
            "/companies/{company_id}/departments/{department_id}",
        )
        .path_param(company_id())
        .path_param(Param::id("department_id", "Department ID"))
        .body(Param::string("name", "Updated name").optional())
        .body(Param::string("description", "Updated description").optional()),
        EndpointTool::delete(
            "delete_company_department",
            "Delete a company department.",
            "/companies/{company_id}/departments/{department_id}",
        )
        .path_param(company_id())
        .path_param(Param::id("department_id", "Department ID")),
        EndpointTool::get(
            "list_company_pipelines",
            "List all pipelines associated with a company.",
            "/companies/{company_id}/pipelines",
        )
        .path_param(company_id()),
        EndpointTool::get(
            "list_company_tags",
            "List all tags applied to a company.",
            "/companies/{company_id}/tags",
        )
        .path_param(company_id()),
        EndpointTool::post(
            "replace_company_tags",
            "Replace all tags on a company (replaces existing tags).",
            "/companies/{company_id}/tags",
        )
        .path_param(company_id())
        .body(Param::int_array("tag_ids", "List of tag IDs to apply")),
        EndpointTool::put(
            "attach_company_tags",
            "Attach additional tags to a company (additive).",
            "/companies/{company_id}/tags",
        )
        .path_param(company_id())
        .body(Param::int_array("tag_ids", "List of tag IDs to add")),
        EndpointTool::delete(
            "delete_company_tag",
            "Remove a specific tag from a company.",
            "/companies/{company_id}/tags/{tag_id}",
        )
        .path_param(company_id())
        .path_param(Param::id("tag_id", "Tag ID to remove")),
        // Company phones
        EndpointTool::get(
            "list_company_phones",
            "List all phone numbers for a company.",
            "/companies/{company_id}/phones",
        )
        .path_param(company_id())
        .query(per_page(25)),
        EndpointTool::get(
            "get_company_phone",
            "Get a specific company phone.",
            "/companies/{company_id}/phones/{phone_id}",
        )
        .path_param(company_id())
        .path_param(phone_id()),
        EndpointTool::post(
            "create_company_phone",
            "Add a phone number for a company.",
            "/companies/{company_id}/phones",
        )
        .path_param(company_id())
        .body(Param::string("phone", "Phone number"))
        .body(Param::string("phone_type", "Type (work, mobile, etc.)").default("work").wire("type")),
        EndpointTool::put(
            "update_company_phone",
            "Update a company phone number.",
            "/companies/{company_id}/phones/{phone_id}",
        )
        .path_param(company_id())
        .path_param(phone_id())
        .body(Param::string("phone", "Updated phone number").optional())
        .body(Param::string("phone_type", "Updated type").optional().wire("type")),
        EndpointTool::delete(
            "delete_company_phone",
            "Delete a company phone number.",
            "/companies/{company_id}/phones/{phone_id}",
        )
        .path_param(company_id())
        .path_param(phone_id()),
        // Custom fields and thumbnails
        EndpointTool::get(
            "get_company_custom_field",
            "Get a specific custom field for a company.",
            "/companies/{company_id}/custom_fields/{field_id}",
        )
        .path_param(company_id())
        .path_param(Param::id("field_id", "Custom field ID")),
        EndpointTool::get(
            "get_company_thumbnail",
            "Get a company's thumbnail image.",
            "/companies/{company_id}/thumbnail",
        )
        .path_param(company_id()),
        EndpointTool::put(
            "change_company_thumbnail",
            "Update a company's thumbnail image.",
            "/companies/{company_id}/thumbnail",
        )
        .path_param(company_id())
        .body(Param::string("image_data", "Base64 encoded image data or image URL").wire("image")),
    ]
}
