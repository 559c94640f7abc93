//! Attachment toolset
//!
//! Attachment metadata, downloads (pre-signed URLs), and resume parsing.
//! `parse_resume` extracts structured data without creating a candidate
//! record.

use crate::api::CatsClient;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::registry::{EndpointTool, Param};
use std::sync::Arc;

/// Register attachment tools
pub fn register(host: &mut McpServer, client: &Arc<CatsClient>) -> Result<usize> {
    host.add_tools(tools(), client)
}

pub(crate) fn tools() -> Vec<EndpointTool> {
    let attachment_id = || Param::id("attachment_id", "The unique identifier of the attachment");

    vec![
        EndpointTool::get(
            "get_attachment",
            "Get metadata for a specific attachment (not the file content itself).",
            "/attachments/{attachment_id}",
        )
        .path_param(attachment_id()),
        EndpointTool::delete(
            "delete_attachment",
            "Delete an attachment (permanent; the file cannot be recovered).",
            "/attachments/{attachment_id}",
        )
        .path_param(attachment_id()),
        EndpointTool::get(
            "download_attachment",
            "Get a pre-signed download URL for an attachment (expires after 1 hour).",
            "/attachments/{attachment_id}/download",
        )
        .path_param(attachment_id()),
        EndpointTool::post(
            "parse_resume",
            "Parse a resume into structured data without creating a candidate record. \
             Supported formats: PDF, DOC, DOCX, TXT, RTF.",
            "/attachments/parse",
        )
        .body(Param::string("file_content", "Base64-encoded file content").wire("file"))
        .body(Param::string("filename", "Original filename with extension")),
    ]
}
