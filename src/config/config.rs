//! Configuration management for the CATS MCP server
//!
//! All configuration comes from the process environment (optionally seeded
//! from a `.env` file by the entry point). There is no config file: the
//! upstream API only needs a credential and a base address, and toolset
//! selection is a startup-time choice.

use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Default base address of the CATS API
pub const DEFAULT_API_BASE_URL: &str = "https://api.catsone.com/v3";

/// Fixed upper bound on upstream call time, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default cap on a serialized tool result, in bytes
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 100_000;

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_response_bytes() -> usize {
    DEFAULT_MAX_RESPONSE_BYTES
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upstream API configuration
    pub api: ApiConfig,
    /// HTTP transport configuration
    pub server: ServerConfig,
    /// Response size limits
    pub limits: LimitsConfig,
    /// Transport to serve on
    pub transport: Transport,
    /// Toolset selection from the environment, if any (comma-separated).
    /// A CLI flag takes precedence over this; the built-in default set is
    /// used when neither is present.
    pub toolsets: Option<Vec<String>>,
}

/// Upstream CATS API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address of the upstream API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API token. May be absent: tools still register, and each invocation
    /// then fails with a per-call missing-credential error.
    pub api_key: Option<String>,
    /// Upper bound on a single upstream call, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Response size limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum serialized size of a successful tool result
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }
}

/// Transport the MCP server speaks on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Newline-delimited JSON-RPC over stdin/stdout (Claude Desktop, Cursor)
    Stdio,
    /// JSON-RPC over HTTP POST, plus a health endpoint
    Http,
}

impl FromStr for Transport {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stdio" => Ok(Transport::Stdio),
            "http" => Ok(Transport::Http),
            other => Err(ServerError::config(format!(
                "Invalid transport '{other}'. Use 'stdio' or 'http'"
            ))),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Recognized variables: `CATS_API_KEY`, `CATS_API_BASE_URL`,
    /// `CATS_TOOLSETS`, `CATS_TRANSPORT`, `CATS_HOST`, `CATS_PORT`,
    /// `CATS_MAX_RESPONSE_BYTES`.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("CATS_API_KEY").ok().filter(|k| !k.is_empty());
        let base_url =
            env::var("CATS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let transport = match env::var("CATS_TRANSPORT") {
            Ok(value) => value.parse()?,
            Err(_) => Transport::Stdio,
        };

        let port = match env::var("CATS_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| {
                ServerError::config(format!("CATS_PORT must be a port number, got '{value}'"))
            })?,
            Err(_) => default_port(),
        };

        let max_response_bytes = match env::var("CATS_MAX_RESPONSE_BYTES") {
            Ok(value) => value.parse::<usize>().map_err(|_| {
                ServerError::config(format!(
                    "CATS_MAX_RESPONSE_BYTES must be an integer, got '{value}'"
                ))
            })?,
            Err(_) => default_max_response_bytes(),
        };

        let toolsets = env::var("CATS_TOOLSETS")
            .ok()
            .map(|raw| parse_toolset_list(&raw))
            .filter(|list| !list.is_empty());

        let config = Self {
            api: ApiConfig {
                base_url,
                api_key,
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            server: ServerConfig {
                host: env::var("CATS_HOST").unwrap_or_else(|_| default_host()),
                port,
            },
            limits: LimitsConfig { max_response_bytes },
            transport,
            toolsets,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ServerError::config("API base URL cannot be empty"));
        }
        url::Url::parse(&self.api.base_url)
            .map_err(|e| ServerError::config(format!("Invalid API base URL: {e}")))?;

        if self.api.timeout_secs == 0 {
            return Err(ServerError::config("API timeout must be non-zero"));
        }

        if self.limits.max_response_bytes == 0 {
            return Err(ServerError::config("max_response_bytes must be non-zero"));
        }

        Ok(())
    }

    /// Whether an API credential is configured
    pub fn api_configured(&self) -> bool {
        self.api.api_key.as_deref().map_or(false, |k| !k.is_empty())
    }
}

/// Split a comma-separated toolset list, trimming blanks
pub fn parse_toolset_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_toolset_list_trims_and_drops_blanks() {
        let parsed = parse_toolset_list(" candidates , jobs,,tasks ");
        assert_eq!(parsed, vec!["candidates", "jobs", "tasks"]);
    }

    #[test]
    fn transport_parses_case_insensitively() {
        assert_eq!("STDIO".parse::<Transport>().unwrap(), Transport::Stdio);
        assert_eq!("http".parse::<Transport>().unwrap(), Transport::Http);
        assert!("grpc".parse::<Transport>().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config {
            api: ApiConfig {
                base_url: "not a url".to_string(),
                api_key: None,
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            limits: LimitsConfig::default(),
            transport: Transport::Stdio,
            toolsets: None,
        };
        assert!(config.validate().is_err());

        config.api.base_url = DEFAULT_API_BASE_URL.to_string();
        assert!(config.validate().is_ok());
    }
}
