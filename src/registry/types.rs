//! Registry types: the toolset catalog entry, the declarative endpoint tool
//! model, and the registration report.
//!
//! Every tool is data: a name, a description, an upstream endpoint (method +
//! path template) and a typed parameter table. The MCP input schema is
//! generated from the table, and at call time the validated arguments are
//! bound onto the path, query string, and JSON body.

use crate::api::CatsClient;
use crate::error::{Result, ServerError};
use crate::mcp::McpServer;
use reqwest::Method;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Registration procedure of one toolset
pub type RegisterFn = fn(&mut McpServer, &Arc<CatsClient>) -> Result<usize>;

/// Produces the toolset's tool table without registering it (listing, counts)
pub type ToolsFn = fn() -> Vec<EndpointTool>;

/// One catalog entry: a named, registrable toolset
pub struct ToolsetEntry {
    /// Unique toolset name (selection key)
    pub name: &'static str,
    /// One-line description shown in the toolset listing
    pub description: &'static str,
    /// Registration procedure, invoked at most once per process
    pub register: RegisterFn,
    /// Tool table accessor for listing and counting
    pub tools: ToolsFn,
}

impl ToolsetEntry {
    /// Number of operations this toolset contributes
    pub fn tool_count(&self) -> usize {
        (self.tools)().len()
    }
}

/// Summary of one registration pass, in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReport {
    /// Toolset name → number of operations registered
    pub per_toolset: Vec<(String, usize)>,
    /// Total operations registered
    pub total: usize,
}

impl RegistrationReport {
    /// Operation count for a toolset, if it was part of this pass
    pub fn count_for(&self, name: &str) -> Option<usize> {
        self.per_toolset
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
    }
}

/// Declared parameter type, used for schema generation and value rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    /// Entity identifier the upstream accepts as integer or string
    Id,
    IntArray,
    StringArray,
    /// Free-form JSON object
    Object,
}

impl ParamKind {
    fn type_schema(&self) -> Value {
        match self {
            Self::String => json!({ "type": "string" }),
            Self::Integer => json!({ "type": "integer" }),
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Id => json!({ "type": ["integer", "string"] }),
            Self::IntArray => json!({ "type": "array", "items": { "type": "integer" } }),
            Self::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
            Self::Object => json!({ "type": "object" }),
        }
    }
}

/// Where a parameter's value lands in the outbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamTarget {
    /// Substituted into a `{name}` placeholder in the path template
    Path,
    /// Appended to the query string
    Query,
    /// Inserted into the JSON body under its wire name
    Body,
    /// Object whose keys are merged into the JSON body root
    BodyExpand,
    /// Consumed by the server itself, never forwarded upstream
    Local,
}

/// One declared tool parameter
#[derive(Debug, Clone)]
pub struct Param {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
    pub target: ParamTarget,
    pub required: bool,
    pub default: Option<Value>,
    /// Key used on the wire when it differs from the declared name
    /// (e.g. `email_type` is sent as `type`)
    pub wire: Option<&'static str>,
}

impl Param {
    fn new(name: &'static str, description: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            description,
            kind,
            target: ParamTarget::Body,
            required: true,
            default: None,
            wire: None,
        }
    }

    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::String)
    }

    pub fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::Integer)
    }

    pub fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::Boolean)
    }

    pub fn id(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::Id)
    }

    pub fn int_array(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::IntArray)
    }

    pub fn string_array(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::StringArray)
    }

    pub fn object(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::Object)
    }

    /// Mark the parameter optional (omitted from the request when absent)
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Give the parameter a default; it is then always sent, using the
    /// default when the caller omits it
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self.required = false;
        self
    }

    /// Rename the parameter on the wire
    pub fn wire(mut self, key: &'static str) -> Self {
        self.wire = Some(key);
        self
    }

    fn wire_name(&self) -> &'static str {
        self.wire.unwrap_or(self.name)
    }

    fn property_schema(&self) -> Value {
        let mut schema = self.kind.type_schema();
        schema["description"] = json!(self.description);
        if let Some(ref default) = self.default {
            schema["default"] = default.clone();
        }
        schema
    }
}

/// A fully bound upstream request, ready for the executor
#[derive(Debug, Clone)]
pub struct BoundRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Server-side parameters (e.g. `fields` for summarization)
    pub locals: HashMap<String, String>,
}

/// Declarative definition of one tool wrapping one upstream endpoint
#[derive(Debug, Clone)]
pub struct EndpointTool {
    pub name: &'static str,
    pub description: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub params: Vec<Param>,
    /// Constant body fields the endpoint requires (e.g. `"type": "job"`)
    pub body_literals: Vec<(&'static str, Value)>,
    /// Entity key for list-response summarization, when enabled
    pub summarize: Option<&'static str>,
}

impl EndpointTool {
    fn new(method: Method, name: &'static str, description: &'static str, path: &'static str) -> Self {
        Self {
            name,
            description,
            method,
            path,
            params: Vec::new(),
            body_literals: Vec::new(),
            summarize: None,
        }
    }

    pub fn get(name: &'static str, description: &'static str, path: &'static str) -> Self {
        Self::new(Method::GET, name, description, path)
    }

    pub fn post(name: &'static str, description: &'static str, path: &'static str) -> Self {
        Self::new(Method::POST, name, description, path)
    }

    pub fn put(name: &'static str, description: &'static str, path: &'static str) -> Self {
        Self::new(Method::PUT, name, description, path)
    }

    pub fn delete(name: &'static str, description: &'static str, path: &'static str) -> Self {
        Self::new(Method::DELETE, name, description, path)
    }

    fn with_target(mut self, mut param: Param, target: ParamTarget) -> Self {
        param.target = target;
        self.params.push(param);
        self
    }

    /// Add a required path parameter (substituted into `{name}`)
    pub fn path_param(self, param: Param) -> Self {
        self.with_target(param, ParamTarget::Path)
    }

    /// Add a query-string parameter
    pub fn query(self, param: Param) -> Self {
        self.with_target(param, ParamTarget::Query)
    }

    /// Add a JSON body parameter
    pub fn body(self, param: Param) -> Self {
        self.with_target(param, ParamTarget::Body)
    }

    /// Add an object parameter whose keys are merged into the body root
    pub fn body_expand(self, param: Param) -> Self {
        self.with_target(param, ParamTarget::BodyExpand)
    }

    /// Add a constant body field
    pub fn body_literal(mut self, key: &'static str, value: Value) -> Self {
        self.body_literals.push((key, value));
        self
    }

    /// Summarize list responses for the given entity type. Adds the optional
    /// `fields` parameter (`"all"` bypasses summarization).
    pub fn summarize(mut self, entity: &'static str) -> Self {
        self.summarize = Some(entity);
        self.with_target(
            Param::string(
                "fields",
                "Comma-separated fields to include, or \"all\" for the full response",
            )
            .optional(),
            ParamTarget::Local,
        )
    }

    /// Generate the MCP input schema from the parameter table
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &self.params {
            properties.insert(param.name.to_string(), param.property_schema());
            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Bind validated arguments onto the endpoint, producing the outbound
    /// request. Arguments are expected to have passed schema validation;
    /// binding still checks that every path placeholder is filled.
    pub fn bind(&self, arguments: &Value) -> Result<BoundRequest> {
        let mut path = self.path.to_string();
        let mut query = Vec::new();
        let mut body = Map::new();
        let mut locals = HashMap::new();
        let has_body_target = !self.body_literals.is_empty()
            || self
                .params
                .iter()
                .any(|p| matches!(p.target, ParamTarget::Body | ParamTarget::BodyExpand));

        for (key, value) in &self.body_literals {
            body.insert(key.to_string(), value.clone());
        }

        for param in &self.params {
            let provided = arguments.get(param.name).filter(|v| !v.is_null());
            let value = match provided.cloned().or_else(|| param.default.clone()) {
                Some(value) => value,
                None => {
                    if param.target == ParamTarget::Path {
                        return Err(ServerError::validation(format!(
                            "Tool '{}' is missing required path parameter '{}'",
                            self.name, param.name
                        )));
                    }
                    continue;
                }
            };

            match param.target {
                ParamTarget::Path => {
                    let rendered = render_scalar(self.name, param.name, &value)?;
                    let placeholder = format!("{{{}}}", param.name);
                    path = path.replace(&placeholder, &rendered);
                }
                ParamTarget::Query => {
                    let rendered = render_scalar(self.name, param.name, &value)?;
                    query.push((param.wire_name().to_string(), rendered));
                }
                ParamTarget::Body => {
                    body.insert(param.wire_name().to_string(), value);
                }
                ParamTarget::BodyExpand => match value {
                    Value::Object(map) => {
                        for (key, entry) in map {
                            body.insert(key, entry);
                        }
                    }
                    _ => {
                        return Err(ServerError::validation(format!(
                            "Tool '{}' parameter '{}' must be an object",
                            self.name, param.name
                        )))
                    }
                },
                ParamTarget::Local => {
                    locals.insert(
                        param.name.to_string(),
                        render_scalar(self.name, param.name, &value)?,
                    );
                }
            }
        }

        if path.contains('{') {
            return Err(ServerError::validation(format!(
                "Tool '{}' has unbound path parameters in '{}'",
                self.name, path
            )));
        }

        Ok(BoundRequest {
            method: self.method.clone(),
            path,
            query,
            body: has_body_target.then(|| Value::Object(body)),
            locals,
        })
    }
}

/// Render a scalar argument for use in a path segment or query value
fn render_scalar(tool: &str, param: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ServerError::validation(format!(
            "Tool '{tool}' parameter '{param}' must be a scalar value"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tool() -> EndpointTool {
        EndpointTool::post(
            "create_candidate_email",
            "Add a new email address for a candidate.",
            "/candidates/{candidate_id}/emails",
        )
        .path_param(Param::integer("candidate_id", "Candidate ID"))
        .body(Param::string("email", "Email address to add"))
        .body(Param::string("email_type", "Type of email").default("personal").wire("type"))
    }

    #[test]
    fn schema_reflects_required_and_defaults() {
        let schema = sample_tool().input_schema();
        assert_eq!(schema["properties"]["candidate_id"]["type"], "integer");
        assert_eq!(schema["properties"]["email_type"]["default"], "personal");
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("candidate_id")));
        assert!(required.contains(&json!("email")));
        assert!(!required.contains(&json!("email_type")));
    }

    #[test]
    fn bind_substitutes_path_and_applies_wire_rename() {
        let bound = sample_tool()
            .bind(&json!({"candidate_id": 42, "email": "a@b.test"}))
            .unwrap();
        assert_eq!(bound.path, "/candidates/42/emails");
        assert_eq!(
            bound.body,
            Some(json!({"email": "a@b.test", "type": "personal"}))
        );
        assert!(bound.query.is_empty());
    }

    #[test]
    fn bind_requires_path_parameters() {
        let err = sample_tool().bind(&json!({"email": "a@b.test"})).unwrap_err();
        assert!(err.to_string().contains("candidate_id"));
    }

    #[test]
    fn bind_merges_expanded_objects_and_literals() {
        let tool = EndpointTool::post("create_job_list", "Create a job list.", "/lists")
            .body(Param::string("name", "List name"))
            .body_literal("type", json!("job"));
        let bound = tool.bind(&json!({"name": "priority"})).unwrap();
        assert_eq!(bound.body, Some(json!({"name": "priority", "type": "job"})));

        let tool = EndpointTool::post("filter_companies", "Filter companies.", "/companies/search")
            .body_expand(Param::object("filters", "Filter criteria"))
            .body(Param::integer("per_page", "Results per page").default(10));
        let bound = tool
            .bind(&json!({"filters": {"city": "SF", "per_page": 99}}))
            .unwrap();
        // Named parameters win over expanded keys, matching declaration order
        assert_eq!(bound.body, Some(json!({"city": "SF", "per_page": 10})));
    }

    #[test]
    fn bind_renders_query_scalars() {
        let tool = EndpointTool::get("list_candidates", "List candidates.", "/candidates")
            .query(Param::integer("per_page", "Results per page").default(25))
            .query(Param::integer("page", "Page number").default(1));
        let bound = tool.bind(&json!({"page": 3})).unwrap();
        assert_eq!(
            bound.query,
            vec![
                ("per_page".to_string(), "25".to_string()),
                ("page".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(bound.body, None);
    }
}
