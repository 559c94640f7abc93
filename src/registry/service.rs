//! Selection resolution and registration dispatch
//!
//! The registry is a one-shot startup actor: Unconfigured → Resolved →
//! Registered → Running, with no way back. `resolve` validates the whole
//! selection before anything touches the host (never a partial registration
//! on bad input), and `register` consumes the resolved selection so it
//! cannot be replayed.

use crate::api::CatsClient;
use crate::error::{Result, ServerError};
use crate::mcp::McpServer;
use crate::registry::catalog::{catalog, catalog_names, ALL_SENTINEL};
use crate::registry::types::RegistrationReport;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;

/// A catalog-validated, de-duplicated set of toolset names.
///
/// Only obtainable through [`resolve`], and consumed by [`register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSelection {
    names: BTreeSet<String>,
}

impl ResolvedSelection {
    /// Whether the selection includes the given toolset
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of selected toolsets
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the selection is empty (never true for a resolved value)
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Selected names, in lexical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Resolve a requested set of toolset names against the catalog.
///
/// The sentinel `"all"` expands to the full catalog and wins over any other
/// names supplied alongside it. Any non-sentinel name absent from the
/// catalog fails the whole resolution — nothing registers on bad input.
pub fn resolve(requested: &BTreeSet<String>) -> Result<ResolvedSelection> {
    if requested.is_empty() {
        return Err(ServerError::config("Toolset selection cannot be empty"));
    }

    let valid = catalog_names();

    if requested.iter().any(|name| name == ALL_SENTINEL) {
        return Ok(ResolvedSelection {
            names: valid.iter().map(|n| n.to_string()).collect(),
        });
    }

    for name in requested {
        if !valid.contains(&name.as_str()) {
            return Err(ServerError::unknown_toolset(name.clone(), &valid));
        }
    }

    Ok(ResolvedSelection {
        names: requested.clone(),
    })
}

/// Register every selected toolset against the host, in catalog order.
///
/// Each registration procedure runs exactly once; a failure inside one
/// propagates immediately, aborting startup rather than serving a tool set
/// smaller than the caller asked for.
pub fn register(
    selection: ResolvedSelection,
    host: &mut McpServer,
    client: &Arc<CatsClient>,
) -> Result<RegistrationReport> {
    let selected: Vec<String> = selection.names().map(str::to_string).collect();
    info!("Loading toolsets: {}", selected.join(", "));

    let mut per_toolset = Vec::new();
    let mut total = 0;

    for entry in catalog() {
        if !selection.contains(entry.name) {
            continue;
        }
        let count = (entry.register)(host, client)?;
        info!("  ✓ {} ({} tools)", entry.name, count);
        per_toolset.push((entry.name.to_string(), count));
        total += count;
    }

    info!("Total toolsets loaded: {} ({} tools)", per_toolset.len(), total);
    Ok(RegistrationReport { per_toolset, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn resolve_rejects_empty_selection() {
        assert!(resolve(&BTreeSet::new()).is_err());
    }

    #[test]
    fn resolve_is_idempotent() {
        let requested = set(&["candidates", "jobs"]);
        let first = resolve(&requested).unwrap();
        let second = resolve(&requested).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sentinel_wins_over_explicit_names() {
        let with_extra = resolve(&set(&["all", "candidates"])).unwrap();
        let bare = resolve(&set(&["all"])).unwrap();
        assert_eq!(with_extra, bare);
        assert_eq!(bare.len(), catalog().len());
    }

    #[test]
    fn unknown_name_names_the_offender() {
        let err = resolve(&set(&["candidates", "not_a_toolset"])).unwrap_err();
        match err {
            ServerError::UnknownToolset { name, valid } => {
                assert_eq!(name, "not_a_toolset");
                assert!(valid.contains("candidates"));
            }
            other => panic!("expected UnknownToolset, got {other}"),
        }
    }
}
