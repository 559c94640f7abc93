//! MCP protocol implementation
//!
//! The subset of the Model Context Protocol this adapter needs: tool
//! definitions, the tools/list and tools/call methods, and JSON-RPC framing
//! shared by the stdio and HTTP transports.

mod errors;
mod server;
mod types;

pub use errors::{McpError, McpErrorCode};
pub use server::{create_error_response, create_success_response, McpServer, RegisteredTool};
pub use types::{McpRequest, McpResponse, Tool, ToolCall, ToolContent, ToolResult};
