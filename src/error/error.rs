//! Error types and handling for the CATS MCP server

use thiserror::Error;

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Main error type for startup and protocol failures.
///
/// Everything in here is fatal from the point of view of the component that
/// returns it: configuration and registry errors abort startup before any
/// request is served. Upstream API failures during a tool invocation are a
/// separate, recoverable taxonomy ([`crate::api::ApiError`]) so that calling
/// code cannot accidentally swallow a configuration defect the way it may
/// swallow a per-call HTTP error.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A requested toolset does not exist in the catalog
    #[error("Unknown toolset '{name}' (valid toolsets: {valid})")]
    UnknownToolset { name: String, valid: String },

    /// Registry errors (duplicate tools, broken registration procedures)
    #[error("Registry error: {message}")]
    Registry { message: String },

    /// MCP protocol errors
    #[error("MCP protocol error: {message}")]
    Mcp { message: String },

    /// Validation errors (tool definitions, schemas, arguments)
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generic errors
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ServerError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown-toolset error, naming the valid options
    pub fn unknown_toolset<S: Into<String>>(name: S, valid: &[&str]) -> Self {
        Self::UnknownToolset {
            name: name.into(),
            valid: valid.join(", "),
        }
    }

    /// Create a registry error
    pub fn registry<S: Into<String>>(message: S) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    /// Create an MCP protocol error
    pub fn mcp<S: Into<String>>(message: S) -> Self {
        Self::Mcp {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
