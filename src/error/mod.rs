//! Error handling module for the CATS MCP server
//!
//! This module provides the fatal (startup-time) error type. Per-invocation
//! upstream failures live in [`crate::api::ApiError`] and are returned as
//! values, never raised through this type.

mod error;

// Re-export the main error types and utilities
pub use error::{Result, ServerError};
