//! Capability registry
//!
//! Translates a validated toolset selection into live, invokable operations
//! on the shared tool host: a statically-known catalog of toolsets, a
//! validate-all-then-register resolution step, and a deterministic
//! registration pass that reports what was loaded.

mod catalog;
mod service;
mod types;

pub use catalog::{catalog, catalog_names, ALL_SENTINEL, DEFAULT_TOOLSETS};
pub use service::{register, resolve, ResolvedSelection};
pub use types::{
    BoundRequest, EndpointTool, Param, ParamKind, ParamTarget, RegistrationReport, ToolsetEntry,
};
