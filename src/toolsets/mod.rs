//! Tool group modules
//!
//! Each module covers one area of the CATS API and exposes a registration
//! procedure over a declarative tool table. Every tool wraps exactly one
//! upstream endpoint; the interesting behavior (schema generation, argument
//! binding, execution, error mapping) lives in the registry and the tool
//! host, so these modules are pure data.

pub mod activities;
pub mod attachments;
pub mod backups;
pub mod candidates;
pub mod companies;
pub mod contacts;
pub mod context;
pub mod events;
pub mod jobs;
pub mod pipelines;
pub mod portals;
pub mod tags;
pub mod tasks;
pub mod triggers;
pub mod users;
pub mod webhooks;
pub mod work_history;

use crate::registry::Param;

/// Standard pagination parameter with the given page size
pub(crate) fn per_page(default: i64) -> Param {
    Param::integer("per_page", "Number of results per page").default(default)
}

/// Standard page-number parameter
pub(crate) fn page() -> Param {
    Param::integer("page", "Page number to retrieve").default(1)
}
