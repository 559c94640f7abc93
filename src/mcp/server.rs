//! MCP server core: the shared tool host
//!
//! Holds the live table of registered operations and serves invocation
//! requests against it. The table is written only during the single-threaded
//! startup registration phase and is read-only for the remainder of the
//! process, so concurrent request serving needs no locking around it.

use crate::api::summary::summarize_list_response;
use crate::api::CatsClient;
use crate::config::LimitsConfig;
use crate::error::{Result, ServerError};
use crate::mcp::errors::McpErrorCode;
use crate::mcp::types::{McpRequest, Tool, ToolCall, ToolContent, ToolResult};
use crate::registry::EndpointTool;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// MCP protocol version advertised during the initialize handshake
const PROTOCOL_VERSION: &str = "2025-06-18";

/// One live operation: its MCP-facing definition plus the endpoint it wraps
pub struct RegisteredTool {
    /// MCP tool definition (name, description, generated input schema)
    pub tool: Tool,
    /// Upstream endpoint binding
    pub endpoint: EndpointTool,
    client: Arc<CatsClient>,
}

/// The shared tool-hosting instance
pub struct McpServer {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
    max_response_bytes: usize,
}

impl McpServer {
    /// Create an empty host with the given response limits
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
            max_response_bytes: limits.max_response_bytes,
        }
    }

    /// Create an empty host with default limits
    pub fn with_defaults() -> Self {
        Self::new(&LimitsConfig::default())
    }

    /// Register a batch of endpoint tools against this host.
    ///
    /// The operation table is append-only; a duplicate tool name is a
    /// registry error that propagates and aborts startup rather than
    /// producing a partially-correct tool set. Returns the number of tools
    /// added.
    pub fn add_tools(
        &mut self,
        endpoints: Vec<EndpointTool>,
        client: &Arc<CatsClient>,
    ) -> Result<usize> {
        let count = endpoints.len();
        for endpoint in endpoints {
            self.add_tool(endpoint, Arc::clone(client))?;
        }
        Ok(count)
    }

    fn add_tool(&mut self, endpoint: EndpointTool, client: Arc<CatsClient>) -> Result<()> {
        if self.index.contains_key(endpoint.name) {
            return Err(ServerError::registry(format!(
                "Duplicate tool name: {}",
                endpoint.name
            )));
        }

        let tool = Tool::new(
            endpoint.name.to_string(),
            endpoint.description.to_string(),
            endpoint.input_schema(),
        )?;

        self.index.insert(tool.name.clone(), self.tools.len());
        self.tools.push(RegisteredTool {
            tool,
            endpoint,
            client,
        });
        Ok(())
    }

    /// Number of registered operations
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Tool definitions in registration order
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|t| t.tool.clone()).collect()
    }

    /// Look up a registered tool by name
    pub fn get_tool(&self, name: &str) -> Option<&RegisteredTool> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// Execute a tool call.
    ///
    /// Returns `Err` only for protocol-level problems (unknown tool, invalid
    /// arguments). Upstream API failures come back as an error `ToolResult`
    /// so one failing call never affects the process or concurrent calls.
    pub async fn call_tool(&self, tool_call: &ToolCall) -> Result<ToolResult> {
        let registered = self.get_tool(&tool_call.name).ok_or_else(|| {
            ServerError::mcp(format!("Tool not found: {}", tool_call.name))
        })?;

        // Some clients send "arguments": null for parameterless tools
        let arguments = if tool_call.arguments.is_null() {
            json!({})
        } else {
            tool_call.arguments.clone()
        };
        registered.tool.validate_arguments(&arguments)?;
        let bound = registered.endpoint.bind(&arguments)?;

        let metadata = json!({
            "tool": registered.tool.name.clone(),
            "method": bound.method.as_str(),
            "path": bound.path.clone(),
        });

        let outcome = registered
            .client
            .execute(
                bound.method.clone(),
                &bound.path,
                &bound.query,
                bound.body.as_ref(),
            )
            .await;

        Ok(match outcome {
            Ok(mut value) => {
                if let Some(entity) = registered.endpoint.summarize {
                    let fields = bound.locals.get("fields").map(String::as_str);
                    if fields != Some("all") {
                        value = summarize_list_response(&value, entity, fields);
                    }
                }
                self.render_success(value, metadata)
            }
            Err(api_error) => {
                let mut meta = metadata;
                meta["kind"] = json!(api_error.kind());
                if let Some(status) = api_error.status() {
                    meta["status_code"] = json!(status);
                }
                ToolResult::error(api_error.to_string()).with_metadata(meta)
            }
        })
    }

    /// Render a successful upstream value, enforcing the response size cap
    fn render_success(&self, value: Value, metadata: Value) -> ToolResult {
        let rendered =
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());

        if rendered.len() > self.max_response_bytes {
            warn!(
                "Response of {} bytes exceeds the {}-byte cap",
                rendered.len(),
                self.max_response_bytes
            );
            return ToolResult::error(format!(
                "Response size {} bytes exceeds the {} byte limit. \
                 Narrow the request with per_page/page or a fields selection.",
                rendered.len(),
                self.max_response_bytes
            ))
            .with_metadata(metadata);
        }

        ToolResult {
            is_error: false,
            content: vec![ToolContent::text(rendered)],
            error: None,
            metadata: Some(metadata),
        }
    }

    /// Handle one JSON-RPC request, returning the serialized response.
    ///
    /// Notifications return `None`.
    pub async fn handle_mcp_request(&self, request: McpRequest) -> Option<String> {
        debug!("Handling MCP method: {}", request.method);

        match request.method.as_str() {
            "initialize" => {
                let result = json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION"),
                    },
                });
                match request.id {
                    Some(ref id) => Some(create_success_response(id, result)),
                    None => Some(create_error_response(
                        None,
                        McpErrorCode::InvalidRequest,
                        "Initialize request must have an ID",
                    )),
                }
            }
            "initialized" | "notifications/initialized" => None,
            "ping" => request
                .id
                .as_ref()
                .map(|id| create_success_response(id, json!({}))),
            "tools/list" => {
                let tools = self.list_tools();
                match request.id {
                    Some(ref id) => Some(create_success_response(id, json!({ "tools": tools }))),
                    None => Some(create_error_response(
                        None,
                        McpErrorCode::InvalidRequest,
                        "Request must have an ID",
                    )),
                }
            }
            "tools/call" => {
                let params = request.params.unwrap_or_else(|| json!({}));
                let tool_call: ToolCall = match serde_json::from_value(params) {
                    Ok(call) => call,
                    Err(e) => {
                        return Some(create_error_response(
                            request.id.as_ref(),
                            McpErrorCode::InvalidParams,
                            &format!("Invalid tool call parameters: {e}"),
                        ))
                    }
                };

                match self.call_tool(&tool_call).await {
                    Ok(result) => match request.id {
                        Some(ref id) => Some(create_success_response(id, json!(result))),
                        None => Some(create_error_response(
                            None,
                            McpErrorCode::InvalidRequest,
                            "Request must have an ID",
                        )),
                    },
                    Err(e) => {
                        let code = match e {
                            ServerError::Mcp { .. } => McpErrorCode::ToolNotFound,
                            ServerError::Validation { .. } => McpErrorCode::InvalidParams,
                            _ => McpErrorCode::InternalError,
                        };
                        Some(create_error_response(
                            request.id.as_ref(),
                            code,
                            &e.to_string(),
                        ))
                    }
                }
            }
            other => {
                // Unknown notifications are ignored; unknown requests get an error
                if request.id.is_none() {
                    debug!("Ignoring unknown notification: {}", other);
                    return None;
                }
                Some(create_error_response(
                    request.id.as_ref(),
                    McpErrorCode::MethodNotFound,
                    &format!("Method not found: {other}"),
                ))
            }
        }
    }
}

/// Create a success JSON-RPC response
pub fn create_success_response(id: &Value, result: Value) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
    .to_string()
}

/// Create an error JSON-RPC response
pub fn create_error_response(id: Option<&Value>, code: McpErrorCode, message: &str) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code.code(),
            "message": message,
        },
    })
    .to_string()
}
