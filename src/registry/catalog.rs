//! The toolset catalog
//!
//! A statically-known mapping from toolset name to registration procedure,
//! resolved at compile time. The catalog is immutable after process start;
//! selection only decides which entries get registered.

use crate::registry::types::ToolsetEntry;
use crate::toolsets;
use once_cell::sync::Lazy;

/// Sentinel selection value meaning "every catalog entry"
pub const ALL_SENTINEL: &str = "all";

/// Toolsets loaded when no explicit selection is given, chosen to balance
/// initial usability against the token cost of advertising every operation
pub const DEFAULT_TOOLSETS: &[&str] = &["candidates", "jobs", "pipelines", "context", "tasks"];

static CATALOG: Lazy<Vec<ToolsetEntry>> = Lazy::new(|| {
    vec![
        ToolsetEntry {
            name: "candidates",
            description: "Core recruiting: candidate records and sub-resources",
            register: toolsets::candidates::register,
            tools: toolsets::candidates::tools,
        },
        ToolsetEntry {
            name: "jobs",
            description: "Job postings, job lists, and applications",
            register: toolsets::jobs::register,
            tools: toolsets::jobs::tools,
        },
        ToolsetEntry {
            name: "pipelines",
            description: "Pipeline and workflow stage management",
            register: toolsets::pipelines::register,
            tools: toolsets::pipelines::tools,
        },
        ToolsetEntry {
            name: "context",
            description: "Site and current-user information",
            register: toolsets::context::register,
            tools: toolsets::context::tools,
        },
        ToolsetEntry {
            name: "tasks",
            description: "Task management",
            register: toolsets::tasks::register,
            tools: toolsets::tasks::tools,
        },
        ToolsetEntry {
            name: "companies",
            description: "Company records and sub-resources",
            register: toolsets::companies::register,
            tools: toolsets::companies::tools,
        },
        ToolsetEntry {
            name: "contacts",
            description: "Contact records and sub-resources",
            register: toolsets::contacts::register,
            tools: toolsets::contacts::tools,
        },
        ToolsetEntry {
            name: "activities",
            description: "Activity log management",
            register: toolsets::activities::register,
            tools: toolsets::activities::tools,
        },
        ToolsetEntry {
            name: "portals",
            description: "Job portals, publishing, and applications",
            register: toolsets::portals::register,
            tools: toolsets::portals::tools,
        },
        ToolsetEntry {
            name: "work_history",
            description: "Candidate work history entries",
            register: toolsets::work_history::register,
            tools: toolsets::work_history::tools,
        },
        ToolsetEntry {
            name: "tags",
            description: "Global tag listing",
            register: toolsets::tags::register,
            tools: toolsets::tags::tools,
        },
        ToolsetEntry {
            name: "webhooks",
            description: "Webhook subscriptions",
            register: toolsets::webhooks::register,
            tools: toolsets::webhooks::tools,
        },
        ToolsetEntry {
            name: "users",
            description: "User accounts (read-only)",
            register: toolsets::users::register,
            tools: toolsets::users::tools,
        },
        ToolsetEntry {
            name: "triggers",
            description: "Trigger configurations (read-only)",
            register: toolsets::triggers::register,
            tools: toolsets::triggers::tools,
        },
        ToolsetEntry {
            name: "attachments",
            description: "Attachment metadata, download, and resume parsing",
            register: toolsets::attachments::register,
            tools: toolsets::attachments::tools,
        },
        ToolsetEntry {
            name: "backups",
            description: "Data backup management",
            register: toolsets::backups::register,
            tools: toolsets::backups::tools,
        },
        ToolsetEntry {
            name: "events",
            description: "System event stream (audit log)",
            register: toolsets::events::register,
            tools: toolsets::events::tools,
        },
    ]
});

/// The full catalog, in definition order
pub fn catalog() -> &'static [ToolsetEntry] {
    &CATALOG
}

/// All catalog names, in definition order
pub fn catalog_names() -> Vec<&'static str> {
    CATALOG.iter().map(|entry| entry.name).collect()
}
