//! Configuration module for the CATS MCP server
//!
//! This module provides configuration loading from the process environment.

mod config;

// Re-export the main configuration types
pub use config::{parse_toolset_list, ApiConfig, Config, LimitsConfig, ServerConfig, Transport};
