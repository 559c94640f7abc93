//! CATS MCP server - selectively loadable tool access to the CATS API
//!
//! This crate exposes the CATS applicant-tracking REST API as MCP tools,
//! organized into toolsets that load on demand so clients only pay the
//! token cost of the operations they asked for. Each tool wraps exactly one
//! upstream endpoint; the registry decides which toolsets register, and the
//! request executor performs the authenticated calls.

pub mod api;
pub mod config;
pub mod error;
pub mod mcp;
pub mod registry;
pub mod toolsets;
pub mod web;

pub use config::Config;
pub use error::{Result, ServerError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
