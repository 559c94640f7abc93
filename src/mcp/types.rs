//! MCP types and structures

use crate::error::{Result, ServerError};
use crate::mcp::errors::McpError;
use jsonschema::JSONSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MCP Tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name (unique identifier)
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON Schema for input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl Tool {
    /// Create a new tool with validation
    pub fn new(name: String, description: String, input_schema: Value) -> Result<Self> {
        let tool = Tool {
            name,
            description,
            input_schema,
        };
        tool.validate()?;
        Ok(tool)
    }

    /// Validate the tool definition
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ServerError::validation("Tool name cannot be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(ServerError::validation(format!(
                "Tool '{}' has an empty description",
                self.name
            )));
        }
        JSONSchema::compile(&self.input_schema).map_err(|e| {
            ServerError::validation(format!("Invalid JSON Schema for tool '{}': {e}", self.name))
        })?;
        Ok(())
    }

    /// Validate arguments against the input schema
    pub fn validate_arguments(&self, arguments: &Value) -> Result<()> {
        let schema = JSONSchema::compile(&self.input_schema).map_err(|e| {
            ServerError::validation(format!(
                "Failed to compile schema for tool '{}': {e}",
                self.name
            ))
        })?;

        if let Err(errors) = schema.validate(arguments) {
            let messages: Vec<String> = errors.map(|e| format!("  - {e}")).collect();
            return Err(ServerError::validation(format!(
                "Invalid arguments for tool '{}':\n{}",
                self.name,
                messages.join("\n")
            )));
        }
        Ok(())
    }
}

fn default_arguments() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Tool call request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name to call
    pub name: String,
    /// Arguments for the tool
    #[serde(default = "default_arguments")]
    pub arguments: Value,
}

impl ToolCall {
    /// Create a new tool call
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// MCP-compliant content item for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    /// Text content
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolContent {
    /// Create text content
    pub fn text(text: String) -> Self {
        Self::Text { text }
    }
}

/// Tool call result (MCP-compliant format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// MCP error flag
    #[serde(rename = "isError")]
    pub is_error: bool,
    /// Content array
    pub content: Vec<ToolContent>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional metadata (upstream endpoint, failure kind, status code)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl ToolResult {
    /// Create a successful result rendering the data as pretty JSON text
    pub fn success(data: &Value) -> Self {
        let rendered =
            serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
        Self {
            is_error: false,
            content: vec![ToolContent::text(rendered)],
            error: None,
            metadata: None,
        }
    }

    /// Create an error result
    pub fn error(error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            is_error: true,
            content: vec![ToolContent::text(format!("Error: {error}"))],
            error: Some(error),
            metadata: None,
        }
    }

    /// Attach metadata to the result
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// JSON-RPC request message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,
    /// Request ID (absent for notifications)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// JSON-RPC response message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,
    /// Request ID this responds to
    pub id: Value,
    /// Result value (mutually exclusive with `error`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error object (mutually exclusive with `result`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}
